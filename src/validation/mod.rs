pub mod config;
pub mod builder;
pub mod engine;
pub mod director;

pub use config::ValidationConfig;
pub use builder::MetricsEngineBuilder;
pub use engine::{Composites, ConfusionRates, EngineSettings, MetricsEngine, RankingMetrics};
pub use director::{PresetInfo, ValidationDirector};
