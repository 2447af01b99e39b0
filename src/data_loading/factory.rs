use super::csv_data_loader::CsvDataLoader;
use super::data_loader::DataLoader;
use super::json_data_loader::JsonDataLoader;
use crate::error::{ValidationError, ValidationResult};

/// Factory pre vytváranie data loaderov podľa typu
pub struct DataLoaderFactory;

impl DataLoaderFactory {
    /// Vytvorí loader na základe typu
    pub fn create(loader_type: &str) -> ValidationResult<Box<dyn DataLoader>> {
        match loader_type.to_lowercase().as_str() {
            "csv" => Ok(Box::new(CsvDataLoader::new())),
            "csv;" | "csv_semicolon" => Ok(Box::new(CsvDataLoader::with_delimiter(b';'))),
            "json" => Ok(Box::new(JsonDataLoader::new())),
            _ => Err(ValidationError::Load(format!("Neznámy typ loadera: {}", loader_type))),
        }
    }

    /// Automaticky detekuje formát na základe obsahu
    pub fn create_auto(data: &str) -> ValidationResult<Box<dyn DataLoader>> {
        let trimmed = data.trim();

        if trimmed.starts_with('[') && trimmed.contains('{') {
            Ok(Box::new(JsonDataLoader::new()))
        } else if trimmed.lines().next().map(|h| h.contains(';') && !h.contains(',')).unwrap_or(false) {
            Ok(Box::new(CsvDataLoader::with_delimiter(b';')))
        } else if trimmed.contains(',') || trimmed.contains('\n') {
            Ok(Box::new(CsvDataLoader::new()))
        } else {
            Err(ValidationError::Load(
                "Nepodarilo sa automaticky detekovať formát dát".to_string(),
            ))
        }
    }

    /// Vráti zoznam všetkých podporovaných formátov
    pub fn available_formats() -> Vec<&'static str> {
        vec!["csv", "csv_semicolon", "json"]
    }

    /// Vráti popis formátu
    pub fn get_format_description(format: &str) -> Option<&'static str> {
        match format.to_lowercase().as_str() {
            "csv" => Some("CSV (Comma-Separated Values) - export výsledkov screeningu"),
            "csv_semicolon" => Some("CSV s oddeľovačom ';' a desatinnou čiarkou"),
            "json" => Some("JSON (JavaScript Object Notation) - formát array of objects"),
            _ => None,
        }
    }
}
