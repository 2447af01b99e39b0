use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// Jeden riadok validačnej tabuľky pre jeden model.
/// Číselné hodnoty sú zaokrúhlené na 3 desatinné miesta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Sensitivity")]
    pub sensitivity: f64,
    #[serde(rename = "Specificity")]
    pub specificity: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
    #[serde(rename = "F1-score")]
    pub f1: f64,
    #[serde(rename = "AP")]
    pub ap: f64,
    #[serde(rename = "AUCROC")]
    pub auc_roc: f64,
    #[serde(rename = "logAUCROC")]
    pub log_auc_roc: f64,
    #[serde(rename = "BedROC")]
    pub bedroc: f64,
    #[serde(rename = "GH")]
    pub gh: f64,
    #[serde(rename = "EF1%")]
    pub ef1: f64,
    #[serde(rename = "RIE")]
    pub rie: f64,
}

impl MetricRecord {
    /// Názvy stĺpcov v poradí výslednej tabuľky
    pub const COLUMNS: [&'static str; 12] = [
        "Model",
        "Sensitivity",
        "Specificity",
        "Precision",
        "F1-score",
        "AP",
        "AUCROC",
        "logAUCROC",
        "BedROC",
        "GH",
        "EF1%",
        "RIE",
    ];

    /// Číselné hodnoty v poradí stĺpcov (bez Model)
    pub fn values(&self) -> [f64; 11] {
        [
            self.sensitivity,
            self.specificity,
            self.precision,
            self.f1,
            self.ap,
            self.auc_roc,
            self.log_auc_roc,
            self.bedroc,
            self.gh,
            self.ef1,
            self.rie,
        ]
    }

    /// Hodnota podľa názvu stĺpca
    pub fn get_metric(&self, name: &str) -> Option<f64> {
        Self::COLUMNS[1..]
            .iter()
            .position(|c| *c == name)
            .map(|i| self.values()[i])
    }
}

/// Porovnávacia tabuľka - jeden riadok na model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTable {
    records: Vec<MetricRecord>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, model: &str) -> Option<&MetricRecord> {
        self.records.iter().find(|r| r.model == model)
    }

    /// Model s najvyššou hodnotou zvolenej metriky
    pub fn best_by(&self, metric: &str) -> Option<&MetricRecord> {
        self.records
            .iter()
            .filter_map(|r| r.get_metric(metric).map(|v| (r, v)))
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(r, _)| r)
    }

    /// Export do CSV s hlavičkou Model,Sensitivity,...
    pub fn to_csv(&self) -> ValidationResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.records.is_empty() {
            writer
                .write_record(MetricRecord::COLUMNS)
                .map_err(|e| ValidationError::Export(format!("CSV: {}", e)))?;
        }
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| ValidationError::Export(format!("CSV: {}", e)))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ValidationError::Export(format!("CSV: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| ValidationError::Export(e.to_string()))
    }

    /// Export do JSON (array of objects)
    pub fn to_json(&self) -> ValidationResult<String> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| ValidationError::Export(format!("JSON: {}", e)))
    }
}

impl FromIterator<MetricRecord> for MetricTable {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, auc: f64) -> MetricRecord {
        MetricRecord {
            model: model.to_string(),
            sensitivity: 0.6,
            specificity: 0.9,
            precision: 0.8,
            f1: 0.686,
            ap: 0.681,
            auc_roc: auc,
            log_auc_roc: 0.425,
            bedroc: 0.811,
            gh: 0.675,
            ef1: 0.0,
            rie: 1.26,
        }
    }

    #[test]
    fn csv_header_follows_column_order() {
        let table: MetricTable = vec![record("m1", 0.84), record("m2", 0.7)].into_iter().collect();
        let csv = table.to_csv().unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), MetricRecord::COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "m1,0.6,0.9,0.8,0.686,0.681,0.84,0.425,0.811,0.675,0.0,1.26"
        );
        assert_eq!(lines.count(), 1);
    }

    #[test]
    fn empty_table_still_has_header() {
        let csv = MetricTable::new().to_csv().unwrap();
        assert_eq!(csv.trim_end(), MetricRecord::COLUMNS.join(","));
    }

    #[test]
    fn export_errors_have_own_variant() {
        let err = ValidationError::Export("CSV: disk full".to_string());
        assert_eq!(err.to_string(), "Chyba pri exporte tabuľky: CSV: disk full");
        assert!(err.metric_error().is_none());
    }

    #[test]
    fn metric_lookup_by_column_name() {
        let r = record("m1", 0.84);
        assert_eq!(r.get_metric("AUCROC"), Some(0.84));
        assert_eq!(r.get_metric("EF1%"), Some(0.0));
        assert_eq!(r.get_metric("Model"), None);
    }

    #[test]
    fn best_model_by_metric() {
        let table: MetricTable = vec![record("m1", 0.84), record("m2", 0.91), record("m3", 0.5)]
            .into_iter()
            .collect();
        assert_eq!(table.best_by("AUCROC").unwrap().model, "m2");
        assert!(table.best_by("unknown").is_none());
        assert_eq!(table.get("m3").unwrap().auc_roc, 0.5);
    }

    #[test]
    fn json_uses_table_column_names() {
        let table: MetricTable = vec![record("m1", 0.84)].into_iter().collect();
        let json = table.to_json().unwrap();
        assert!(json.contains("\"EF1%\""));
        assert!(json.contains("\"BedROC\""));
        let back: Vec<MetricRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], record("m1", 0.84));
    }
}
