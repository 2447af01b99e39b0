use std::collections::HashMap;
use crate::error::{ValidationError, ValidationResult};

/// Tabuľka výsledkov screeningu - pomenované numerické stĺpce rovnakej dĺžky
/// (napr. "Active", "predict", "{model}_rescore")
#[derive(Debug, Clone, Default)]
pub struct ScreeningTable {
    headers: Vec<String>,
    columns: HashMap<String, Vec<f64>>,
    num_rows: usize,
}

impl ScreeningTable {
    /// Vytvorí tabuľku zo stĺpcov, všetky musia mať rovnakú dĺžku
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> ValidationResult<Self> {
        let mut table = Self::default();
        for (name, values) in columns {
            table.insert_column(&name, values)?;
        }
        Ok(table)
    }

    /// Pridá (alebo nahradí) stĺpec
    pub fn insert_column(&mut self, name: &str, values: Vec<f64>) -> ValidationResult<()> {
        let is_only_column = self.headers.len() == 1 && self.columns.contains_key(name);
        if !self.headers.is_empty() && !is_only_column && values.len() != self.num_rows {
            return Err(ValidationError::Load(format!(
                "Stĺpec '{}' má {} riadkov, očakávaných {}",
                name,
                values.len(),
                self.num_rows
            )));
        }

        if !self.columns.contains_key(name) {
            self.headers.push(name.to_string());
        }
        self.num_rows = values.len();
        self.columns.insert(name.to_string(), values);
        Ok(())
    }

    /// Vráti stĺpec podľa názvu
    pub fn column(&self, name: &str) -> ValidationResult<&[f64]> {
        self.columns
            .get(name)
            .map(|c| c.as_slice())
            .ok_or_else(|| ValidationError::ColumnNotFound {
                column: name.to_string(),
                available: self.headers.clone(),
            })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }
}

/// Strategy pattern pre načítanie dát z rôznych zdrojov
pub trait DataLoader {
    /// Názov loadera
    fn get_name(&self) -> &str;

    /// Načíta dáta zo stringu
    fn load_from_string(&mut self, data: &str) -> ValidationResult<ScreeningTable>;

    /// Získa dostupné stĺpce (headers) z dát
    fn get_available_columns(&self, data: &str) -> ValidationResult<Vec<String>>;

    /// Validuje formát dát pred načítaním
    fn validate_format(&self, data: &str) -> ValidationResult<()>;
}

/// Konvertuje textovú hodnotu bunky na f64.
/// Boolean hodnoty (true/false) sa mapujú na 1/0, prázdna bunka je chyba.
pub(crate) fn parse_cell(val: &str, column: &str, row: usize) -> ValidationResult<f64> {
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Load(format!(
            "Prázdna hodnota v stĺpci '{}' (riadok {})",
            column,
            row + 1
        )));
    }

    match trimmed.to_lowercase().as_str() {
        "true" => return Ok(1.0),
        "false" => return Ok(0.0),
        _ => {}
    }

    trimmed
        .parse::<f64>()
        .or_else(|_| trimmed.replace(',', ".").parse::<f64>())
        .map_err(|_| {
            ValidationError::Load(format!(
                "Hodnota '{}' v stĺpci '{}' (riadok {}) nie je číslo",
                val,
                column,
                row + 1
            ))
        })
}
