use wasm_bindgen::prelude::*;

use crate::error::ValidationResult;
use crate::evaluation::{MetricRecord, MetricTable};
use crate::plotting::RenderContext;
use crate::validation::{ValidationConfig, ValidationDirector};

/// Validátor pre frontend. Zbiera riadky tabuľky a krivky všetkých
/// validovaných modelov, kým sa nezavolá `reset`.
#[wasm_bindgen]
pub struct WasmValidator {
    results: MetricTable,
    ctx: RenderContext,
}

#[wasm_bindgen]
impl WasmValidator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmValidator {
        console_error_panic_hook::set_once();
        WasmValidator {
            results: MetricTable::new(),
            ctx: RenderContext::new(),
        }
    }

    /// Zvaliduje model nad dátami (CSV/JSON). `config` je objekt ValidationConfig,
    /// vracia riadok tabuľky ako JS objekt.
    pub fn validate(&mut self, data: &str, format: &str, config: JsValue) -> Result<JsValue, JsValue> {
        let config: ValidationConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Chyba v konfigurácii: {}", e)))?;

        let record = self
            .validate_text(data, format, &config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&record)
            .map_err(|e| JsValue::from_str(&format!("Chyba pri serializácii: {}", e)))
    }

    /// Variant s konfiguráciou ako JSON string
    #[wasm_bindgen(js_name = validateJson)]
    pub fn validate_json(&mut self, data: &str, format: &str, config_json: &str) -> Result<JsValue, JsValue> {
        let config = ValidationConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let record = self
            .validate_text(data, format, &config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&record)
            .map_err(|e| JsValue::from_str(&format!("Chyba pri serializácii: {}", e)))
    }

    /// Porovnávacia tabuľka všetkých doteraz validovaných modelov
    #[wasm_bindgen(js_name = tableCsv)]
    pub fn table_csv(&self) -> Result<String, JsValue> {
        self.results.to_csv().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = tableJson)]
    pub fn table_json(&self) -> Result<String, JsValue> {
        self.results.to_json().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Grafy (ROC / PR) ako SVG string
    #[wasm_bindgen(js_name = renderSvg)]
    pub fn render_svg(&self) -> Result<String, JsValue> {
        self.ctx.render_svg().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = modelCount)]
    pub fn model_count(&self) -> usize {
        self.results.len()
    }

    pub fn reset(&mut self) {
        self.results = MetricTable::new();
        self.ctx = RenderContext::new();
    }
}

impl WasmValidator {
    pub(crate) fn validate_text(
        &mut self,
        data: &str,
        format: &str,
        config: &ValidationConfig,
    ) -> ValidationResult<MetricRecord> {
        let record = ValidationDirector::validate_from_text(data, format, config, &mut self.ctx)?;
        self.results.push(record.clone());
        Ok(record)
    }
}

impl Default for WasmValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Active,predict,m_rescore\n1,1,0.9\n0,0,0.2\n1,0,0.7\n0,1,0.4\n";

    #[test]
    fn accumulates_records_and_curves() {
        let mut validator = WasmValidator::new();
        let record = validator
            .validate_text(CSV, "csv", &ValidationConfig::new("m"))
            .unwrap();
        assert_eq!(record.auc_roc, 1.0);

        validator
            .validate_text(CSV, "auto", &ValidationConfig::new("m"))
            .unwrap();
        assert_eq!(validator.model_count(), 2);
        assert_eq!(validator.table_csv().unwrap().lines().count(), 3);
        assert!(validator.render_svg().unwrap().contains("m (AUC = 1.000)"));

        validator.reset();
        assert_eq!(validator.model_count(), 0);
    }

    #[test]
    fn failed_validation_is_not_recorded() {
        let mut validator = WasmValidator::new();
        assert!(validator
            .validate_text(CSV, "csv", &ValidationConfig::new("other"))
            .is_err());
        assert_eq!(validator.model_count(), 0);
    }
}
