//! Chybové typy knižnice.
//!
//! `MetricError` vracajú čisté metrické funkcie (nevedia nič o modeli),
//! `ValidationError` je chyba celej evaluácie - obalí `MetricError` názvom modelu.

use thiserror::Error;

/// Chyby pri výpočte jednej metriky.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// Metrika nie je definovaná (nulový menovateľ, žiadne aktívne látky, ...)
    #[error("Metrika {metric} nie je definovaná: {reason}")]
    Degenerate { metric: &'static str, reason: String },

    #[error("Nesúlad dĺžok: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Label alebo predikcia mimo {0, 1}
    #[error("Neplatný binárny label {value} na riadku {index}")]
    InvalidLabel { index: usize, value: f64 },

    #[error("Skóre na riadku {index} nie je konečné číslo ({value})")]
    NonFiniteScore { index: usize, value: f64 },

    #[error("Os x nie je monotónna, plochu nie je možné integrovať")]
    NonMonotonic,

    #[error("Neplatný parameter: {0}")]
    InvalidParameter(String),

    #[error("Prázdny vstup pre metriku {0}")]
    EmptyInput(&'static str),
}

impl MetricError {
    pub(crate) fn degenerate(metric: &'static str, reason: impl Into<String>) -> Self {
        MetricError::Degenerate {
            metric,
            reason: reason.into(),
        }
    }

    /// Názov metriky, ak ide o degenerovaný vstup
    pub fn metric(&self) -> Option<&'static str> {
        match self {
            MetricError::Degenerate { metric, .. } => Some(metric),
            MetricError::EmptyInput(metric) => Some(metric),
            _ => None,
        }
    }
}

/// Chyby evaluácie jedného modelu.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Stĺpec '{column}' sa nenachádza v dátach. Dostupné stĺpce: {available:?}")]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Chyba pri načítaní dát: {0}")]
    Load(String),

    #[error("Neplatná konfigurácia: {0}")]
    InvalidConfig(String),

    /// Zlyhanie metriky pre konkrétny model
    #[error("Model '{model}': {source}")]
    Metric {
        model: String,
        #[source]
        source: MetricError,
    },

    #[error("Chyba pri vykresľovaní grafu: {0}")]
    Plot(String),

    /// Zlyhanie exportu tabuľky (CSV / JSON)
    #[error("Chyba pri exporte tabuľky: {0}")]
    Export(String),

    /// Krok evaluácie zavolaný pred výpočtom metrík, na ktorých závisí
    #[error("{0} ešte neboli vypočítané, zavolajte najprv metrics()")]
    NotComputed(String),

    #[error("I/O chyba: {0}")]
    Io(#[from] std::io::Error),
}

impl ValidationError {
    pub(crate) fn metric(model: &str, source: MetricError) -> Self {
        ValidationError::Metric {
            model: model.to_string(),
            source,
        }
    }

    /// Vnútorná metrická chyba (ak nejaká je)
    pub fn metric_error(&self) -> Option<&MetricError> {
        match self {
            ValidationError::Metric { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_error_names_model_and_metric() {
        let err = ValidationError::metric(
            "hypo1",
            MetricError::degenerate("EF", "žiadne aktívne látky"),
        );
        let msg = err.to_string();
        assert!(msg.contains("hypo1"));
        assert!(msg.contains("EF"));
        assert_eq!(err.metric_error().and_then(|e| e.metric()), Some("EF"));
    }

    #[test]
    fn column_not_found_lists_available_columns() {
        let err = ValidationError::ColumnNotFound {
            column: "m1_rescore".to_string(),
            available: vec!["Active".to_string(), "predict".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("m1_rescore"));
        assert!(msg.contains("predict"));
        assert!(err.metric_error().is_none());
    }

    #[test]
    fn not_computed_points_to_metrics_step() {
        let err = ValidationError::NotComputed("F1 a GH".to_string());
        assert_eq!(
            err.to_string(),
            "F1 a GH ešte neboli vypočítané, zavolajte najprv metrics()"
        );
    }
}
