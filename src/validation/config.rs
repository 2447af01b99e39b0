use serde::{Deserialize, Serialize};

use super::builder::MetricsEngineBuilder;
use crate::error::{ValidationError, ValidationResult};
use crate::plotting::PlotType;

pub const DEFAULT_ACTIVE_COLUMN: &str = "Active";
pub const DEFAULT_PREDICT_COLUMN: &str = "predict";
pub const DEFAULT_AUC_THRESH: f64 = 0.5;

fn default_active() -> String {
    DEFAULT_ACTIVE_COLUMN.to_string()
}

fn default_predict() -> String {
    DEFAULT_PREDICT_COLUMN.to_string()
}

fn default_auc_thresh() -> f64 {
    DEFAULT_AUC_THRESH
}

/// Konfigurácia validácie jedného modelu (napr. z JSON z frontendu)
///
/// ```json
/// { "model": "ph4_a", "auc_thresh": 0.6, "plottype": "both", "figsize": [10, 8] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_active")]
    pub active: String,
    #[serde(default = "default_predict")]
    pub predict: String,
    pub model: String,
    /// Stĺpec so skóre, predvolene `{model}_rescore`
    #[serde(default)]
    pub scores: Option<String>,
    #[serde(default = "default_auc_thresh")]
    pub auc_thresh: f64,
    #[serde(default)]
    pub rescore: Option<String>,
    #[serde(default)]
    pub plottype: PlotType,
    /// Veľkosť figúry v palcoch (šírka, výška)
    #[serde(default)]
    pub figsize: Option<(f64, f64)>,
}

impl ValidationConfig {
    pub fn new(model: &str) -> Self {
        Self {
            active: default_active(),
            predict: default_predict(),
            model: model.to_string(),
            scores: None,
            auc_thresh: DEFAULT_AUC_THRESH,
            rescore: None,
            plottype: PlotType::default(),
            figsize: None,
        }
    }

    pub fn from_json(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::InvalidConfig(format!("Neplatná konfigurácia: {}", e)))
    }

    /// Názov stĺpca so skóre po doplnení predvolenej hodnoty
    pub fn score_column(&self) -> String {
        self.scores
            .clone()
            .unwrap_or_else(|| format!("{}_rescore", self.model))
    }

    /// Prevedie konfiguráciu na builder (stĺpce sa overia až pri build)
    pub fn into_builder(self) -> MetricsEngineBuilder {
        let mut builder = MetricsEngineBuilder::new()
            .active(&self.active)
            .predict(&self.predict)
            .model(&self.model)
            .auc_thresh(self.auc_thresh)
            .plot_type(self.plottype);

        if let Some(scores) = &self.scores {
            builder = builder.scores(scores);
        }
        if let Some(rescore) = &self.rescore {
            builder = builder.rescore(rescore);
        }
        if let Some((w, h)) = self.figsize {
            builder = builder.figsize(w, h);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_filled_from_json() {
        let config = ValidationConfig::from_json(r#"{ "model": "ph4_a" }"#).unwrap();

        assert_eq!(config.active, "Active");
        assert_eq!(config.predict, "predict");
        assert_eq!(config.auc_thresh, 0.5);
        assert_eq!(config.plottype, PlotType::Auc);
        assert_eq!(config.figsize, None);
        assert_eq!(config.score_column(), "ph4_a_rescore");
        assert_eq!(config, ValidationConfig::new("ph4_a"));
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let json = r#"{
            "model": "m",
            "scores": "dock_score",
            "active": "label",
            "auc_thresh": 0.7,
            "plottype": "both",
            "figsize": [10.0, 8.0]
        }"#;
        let config = ValidationConfig::from_json(json).unwrap();

        assert_eq!(config.score_column(), "dock_score");
        assert_eq!(config.active, "label");
        assert_eq!(config.plottype, PlotType::Both);
        assert_eq!(config.figsize, Some((10.0, 8.0)));
    }

    #[test]
    fn missing_model_is_rejected() {
        let err = ValidationConfig::from_json(r#"{ "active": "Active" }"#).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidConfig(_)));
        assert!(ValidationConfig::from_json(r#"{ "model": "m", "plottype": "pie" }"#).is_err());
    }
}
