pub mod validator_api;
pub mod data_loader_api;
pub mod options_api;

pub use validator_api::WasmValidator;
pub use data_loader_api::WasmDataLoader;
pub use options_api::WasmOptions;
