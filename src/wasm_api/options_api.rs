use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data_loading::DataLoaderFactory;
use crate::evaluation::MetricRecord;
use crate::validation::ValidationDirector;

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailableOptions {
    pub data_formats: Vec<FormatInfo>,
    pub presets: Vec<PresetOption>,
    pub plot_types: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PresetOption {
    pub name: String,
    pub description: String,
    pub plot_type: String,
}

pub(crate) fn available_options() -> AvailableOptions {
    let data_formats = DataLoaderFactory::available_formats()
        .iter()
        .map(|name| FormatInfo {
            name: name.to_string(),
            description: DataLoaderFactory::get_format_description(name)
                .unwrap_or("")
                .to_string(),
        })
        .collect();

    let presets = ValidationDirector::available_presets()
        .into_iter()
        .map(|p| PresetOption {
            name: p.name.to_string(),
            description: p.description.to_string(),
            plot_type: p.plot_type.to_string(),
        })
        .collect();

    AvailableOptions {
        data_formats,
        presets,
        plot_types: vec!["auc".to_string(), "ap".to_string(), "both".to_string()],
        metrics: MetricRecord::COLUMNS[1..].iter().map(|c| c.to_string()).collect(),
    }
}

/// Možnosti pre frontend (formáty, presety, typy grafov, metriky)
#[wasm_bindgen]
pub struct WasmOptions;

#[wasm_bindgen]
impl WasmOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmOptions {
        console_error_panic_hook::set_once();
        WasmOptions
    }

    #[wasm_bindgen(js_name = getAvailableOptions)]
    pub fn get_available_options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&available_options()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmOptions {
    fn default() -> Self {
        Self::new()
    }
}
