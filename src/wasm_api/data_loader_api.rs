use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data_loading::{DataLoader, DataLoaderFactory};
use crate::error::ValidationResult;

/// Súhrn načítanej tabuľky pre frontend
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadedDataInfo {
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    /// Modely, pre ktoré existuje stĺpec `{model}_rescore`
    pub detected_models: Vec<String>,
}

#[wasm_bindgen]
pub struct WasmDataLoader {
    loader: Box<dyn DataLoader>,
}

#[wasm_bindgen]
impl WasmDataLoader {
    #[wasm_bindgen(constructor)]
    pub fn new(format: &str) -> Result<WasmDataLoader, JsValue> {
        console_error_panic_hook::set_once();
        let loader = DataLoaderFactory::create(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmDataLoader { loader })
    }

    /// Automaticky detekuje formát
    #[wasm_bindgen(js_name = createAuto)]
    pub fn create_auto(data: &str) -> Result<WasmDataLoader, JsValue> {
        console_error_panic_hook::set_once();
        let loader = DataLoaderFactory::create_auto(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmDataLoader { loader })
    }

    #[wasm_bindgen(js_name = getName)]
    pub fn get_name(&self) -> String {
        self.loader.get_name().to_string()
    }

    /// Získa dostupné stĺpce z dát
    #[wasm_bindgen(js_name = getAvailableColumns)]
    pub fn get_available_columns(&self, data: &str) -> Result<JsValue, JsValue> {
        let columns = self
            .loader
            .get_available_columns(data)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&columns).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = validateFormat)]
    pub fn validate_format(&self, data: &str) -> Result<(), JsValue> {
        self.loader
            .validate_format(data)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Načíta dáta a vráti info o tabuľke
    #[wasm_bindgen(js_name = loadData)]
    pub fn load_data(&mut self, data: &str) -> Result<JsValue, JsValue> {
        let info = self.describe(data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&info).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl WasmDataLoader {
    pub(crate) fn describe(&mut self, data: &str) -> ValidationResult<LoadedDataInfo> {
        let table = self.loader.load_from_string(data)?;
        let detected_models = table
            .headers()
            .iter()
            .filter_map(|h| h.strip_suffix("_rescore"))
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string())
            .collect();

        Ok(LoadedDataInfo {
            num_rows: table.num_rows(),
            num_columns: table.num_columns(),
            columns: table.headers().to_vec(),
            detected_models,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_table_and_detects_models() {
        let mut loader = WasmDataLoader {
            loader: DataLoaderFactory::create("csv").unwrap(),
        };
        let info = loader
            .describe("Active,predict,h1_rescore,h2_rescore,rescore\n1,1,0.9,0.1,3\n0,0,0.2,0.5,4\n")
            .unwrap();

        assert_eq!(info.num_rows, 2);
        assert_eq!(info.num_columns, 5);
        assert_eq!(info.detected_models, vec!["h1", "h2"]);
    }
}
