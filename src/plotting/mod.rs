pub mod context;
pub mod charts;

pub use context::{CurveSeries, PlotType, RenderContext, DEFAULT_FIGSIZE};
pub use charts::DEEP_PALETTE;
