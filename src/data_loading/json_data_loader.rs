use super::data_loader::{parse_cell, DataLoader, ScreeningTable};
use crate::error::{ValidationError, ValidationResult};
use serde_json::Value;

/// JSON Data Loader - implementácia Strategy pattern pre JSON súbory
pub struct JsonDataLoader;

impl JsonDataLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parsuje JSON array of objects formát
    /// Príklad: [{"Active": 1, "predict": 0, "m1_rescore": -7.4}, ...]
    fn parse_json_array(&self, json_text: &str) -> ValidationResult<(Vec<String>, Vec<Vec<String>>)> {
        let parsed: Value = serde_json::from_str(json_text)
            .map_err(|e| ValidationError::Load(format!("Chyba pri parsovaní JSON: {}", e)))?;

        let array = parsed
            .as_array()
            .ok_or_else(|| ValidationError::Load("JSON musí byť array objektov".to_string()))?;

        if array.is_empty() {
            return Err(ValidationError::Load("JSON array je prázdny".to_string()));
        }

        // Headers z prvého objektu
        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| ValidationError::Load("Prvý element musí byť objekt".to_string()))?;

        // Poradie kľúčov ako v súbore (serde_json "preserve_order")
        let headers: Vec<String> = first_obj.keys().map(|k| k.to_string()).collect();

        let mut records = Vec::with_capacity(array.len());
        for (idx, item) in array.iter().enumerate() {
            let obj = item.as_object().ok_or_else(|| {
                ValidationError::Load(format!("Element {} nie je objekt", idx))
            })?;

            if let Some(extra) = obj.keys().find(|k| !headers.contains(k)) {
                return Err(ValidationError::Load(format!(
                    "Neočakávaný kľúč '{}' v elemente {}, stĺpce sú určené prvým objektom",
                    extra, idx
                )));
            }

            let mut record = Vec::with_capacity(headers.len());
            for header in &headers {
                let value = obj.get(header).ok_or_else(|| {
                    ValidationError::Load(format!("Chýba kľúč '{}' v elemente {}", header, idx))
                })?;

                let value_str = match value {
                    Value::Number(n) => n.to_string(),
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                    _ => {
                        return Err(ValidationError::Load(format!(
                            "Nepodporovaný typ hodnoty pre kľúč '{}'",
                            header
                        )))
                    }
                };
                record.push(value_str);
            }
            records.push(record);
        }

        Ok((headers, records))
    }
}

impl DataLoader for JsonDataLoader {
    fn get_name(&self) -> &str {
        "JSON Data Loader"
    }

    fn load_from_string(&mut self, data: &str) -> ValidationResult<ScreeningTable> {
        self.validate_format(data)?;

        let (headers, records) = self.parse_json_array(data)?;

        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); headers.len()];
        for (row_idx, record) in records.iter().enumerate() {
            for (col_idx, header) in headers.iter().enumerate() {
                columns[col_idx].push(parse_cell(&record[col_idx], header, row_idx)?);
            }
        }

        ScreeningTable::from_columns(headers.into_iter().zip(columns).collect())
    }

    fn get_available_columns(&self, data: &str) -> ValidationResult<Vec<String>> {
        let (headers, _) = self.parse_json_array(data)?;
        Ok(headers)
    }

    fn validate_format(&self, data: &str) -> ValidationResult<()> {
        let trimmed = data.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Load("JSON dáta sú prázdne".to_string()));
        }

        if !trimmed.starts_with('[') || !trimmed.ends_with(']') {
            return Err(ValidationError::Load(
                "JSON musí byť array (začínať '[' a končiť ']')".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for JsonDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_records_with_bool_labels() {
        let data = r#"[
            {"Active": true, "predict": 1, "m1_rescore": -8.5},
            {"Active": false, "predict": 0, "m1_rescore": -5.0}
        ]"#;
        let table = JsonDataLoader::new().load_from_string(data).unwrap();

        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.column("Active").unwrap(), &[1.0, 0.0]);
        assert_eq!(table.column("m1_rescore").unwrap(), &[-8.5, -5.0]);
    }

    #[test]
    fn missing_key_is_an_error() {
        let data = r#"[{"Active": 1, "score": 0.2}, {"Active": 0}]"#;
        let err = JsonDataLoader::new().load_from_string(data).unwrap_err();
        assert!(err.to_string().contains("score"));
    }

    #[test]
    fn headers_keep_file_order() {
        let data = r#"[{"predict": 1, "Active": 1, "m_rescore": -7.4}]"#;
        let loader = JsonDataLoader::new();

        assert_eq!(
            loader.get_available_columns(data).unwrap(),
            vec!["predict", "Active", "m_rescore"]
        );
        let table = JsonDataLoader::new().load_from_string(data).unwrap();
        assert_eq!(table.headers(), &["predict", "Active", "m_rescore"]);
    }

    #[test]
    fn unexpected_key_is_an_error() {
        let data = r#"[{"Active": 1, "score": 0.2}, {"Active": 0, "score": 0.1, "scroe": 0.3}]"#;
        let err = JsonDataLoader::new().load_from_string(data).unwrap_err();

        assert!(matches!(err, ValidationError::Load(_)));
        assert!(err.to_string().contains("'scroe' v elemente 1"));
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(JsonDataLoader::new().load_from_string(r#"{"Active": 1}"#).is_err());
        assert!(JsonDataLoader::new().load_from_string("[]").is_err());
    }
}
