use super::data_loader::{parse_cell, DataLoader, ScreeningTable};
use crate::error::{ValidationError, ValidationResult};
use csv::ReaderBuilder;

/// CSV Data Loader - implementácia Strategy pattern pre CSV súbory
pub struct CsvDataLoader {
    delimiter: u8,
}

impl CsvDataLoader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Loader s iným oddeľovačom (napr. ';' pre exporty s desatinnou čiarkou)
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Helper pre parsovanie CSV - vráti hlavičky a riadky ako stringy
    fn parse_csv(&self, csv_text: &str) -> ValidationResult<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .from_reader(csv_text.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| ValidationError::Load(format!("Chyba pri čítaní CSV hlavičiek: {}", e)))?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ValidationError::Load("CSV nemá žiadne stĺpce".to_string()));
        }

        let mut records = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| {
                ValidationError::Load(format!("Chyba pri čítaní riadku {}: {}", idx + 1, e))
            })?;
            records.push(record.iter().map(|v| v.to_string()).collect::<Vec<_>>());
        }

        if records.is_empty() {
            return Err(ValidationError::Load("CSV neobsahuje žiadne dáta".to_string()));
        }

        Ok((headers, records))
    }
}

impl DataLoader for CsvDataLoader {
    fn get_name(&self) -> &str {
        "CSV Data Loader"
    }

    fn load_from_string(&mut self, data: &str) -> ValidationResult<ScreeningTable> {
        self.validate_format(data)?;

        let (headers, records) = self.parse_csv(data)?;

        // Stĺpcová reprezentácia
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); headers.len()];
        for (row_idx, record) in records.iter().enumerate() {
            for (col_idx, header) in headers.iter().enumerate() {
                let val = parse_cell(&record[col_idx], header, row_idx)?;
                columns[col_idx].push(val);
            }
        }

        ScreeningTable::from_columns(headers.into_iter().zip(columns).collect())
    }

    fn get_available_columns(&self, data: &str) -> ValidationResult<Vec<String>> {
        let (headers, _) = self.parse_csv(data)?;
        Ok(headers)
    }

    fn validate_format(&self, data: &str) -> ValidationResult<()> {
        if data.trim().is_empty() {
            return Err(ValidationError::Load("CSV dáta sú prázdne".to_string()));
        }

        let lines = data.lines().filter(|l| !l.trim().is_empty()).count();
        if lines < 2 {
            return Err(ValidationError::Load(
                "CSV musí obsahovať aspoň header a jeden riadok dát".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CsvDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: &str = "Active,predict,m1_rescore\n1,1,-9.2\n0,0,-4.1\n1,0,-7.7\n0,1,-6.0\n";

    #[test]
    fn loads_named_columns() {
        let mut loader = CsvDataLoader::new();
        let table = loader.load_from_string(SCREEN).unwrap();

        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.headers(), &["Active", "predict", "m1_rescore"]);
        assert_eq!(table.column("m1_rescore").unwrap(), &[-9.2, -4.1, -7.7, -6.0]);
    }

    #[test]
    fn semicolon_export_with_decimal_comma() {
        let mut loader = CsvDataLoader::with_delimiter(b';');
        let table = loader
            .load_from_string("Active;m1_rescore\nTrue;0,75\nFalse;0,25\n")
            .unwrap();
        assert_eq!(table.column("Active").unwrap(), &[1.0, 0.0]);
        assert_eq!(table.column("m1_rescore").unwrap(), &[0.75, 0.25]);
    }

    #[test]
    fn reports_bad_cell_with_row_and_column() {
        let mut loader = CsvDataLoader::new();
        let err = loader
            .load_from_string("Active,score\n1,0.5\n0,n/a\n")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("score"));
        assert!(msg.contains("riadok 2"));
    }

    #[test]
    fn header_only_input_is_rejected() {
        let mut loader = CsvDataLoader::new();
        assert!(loader.load_from_string("Active,score\n").is_err());
        assert!(loader.validate_format("   ").is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let mut loader = CsvDataLoader::new();
        assert!(loader.load_from_string("Active,score\n1,0.5\n0\n").is_err());
    }
}
