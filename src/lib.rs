//! Validácia farmakoforových modelov z výsledkov virtuálneho screeningu.
//!
//! Pre každý model sa z tabuľky (aktivita, binárna predikcia, skóre) vypočíta
//! riadok s mierami Sensitivity, Specificity, Precision, F1, AP, AUCROC,
//! logAUCROC, BEDROC, GH, EF1% a RIE, voliteľne aj ROC / PR graf.

pub mod error;
pub mod data_loading;
pub mod evaluation;
pub mod plotting;
pub mod validation;
pub mod wasm_api;

pub use error::{MetricError, MetricResult, ValidationError, ValidationResult};
pub use data_loading::{DataLoader, DataLoaderFactory, ScreeningTable};
pub use evaluation::{MetricRecord, MetricTable};
pub use plotting::{PlotType, RenderContext};
pub use validation::{MetricsEngine, MetricsEngineBuilder, ValidationConfig, ValidationDirector};
pub use wasm_api::{WasmDataLoader, WasmOptions, WasmValidator};
