pub mod series;
pub mod evaluator;
pub mod curves;
pub mod early_recognition;
pub mod metrics;

pub use series::{RankedSeries, binary_mask, positive_mask, descending_order};
pub use evaluator::{ConfusionMatrix, recall, precision, f1_score, gh_score, round3};
pub use curves::{RocCurve, PrecisionRecallCurve, roc_curve, precision_recall_curve, average_precision, trapezoidal_auc};
pub use early_recognition::{
    enrichment_factor, rie, bedroc, rie_with_label, bedroc_with_label, roc_log_auc,
    LogAucParams, ScoreOrientation, DEFAULT_ALPHA, EF_FRACTION,
};
pub use metrics::{MetricRecord, MetricTable};
