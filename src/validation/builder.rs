use super::config::DEFAULT_AUC_THRESH;
use super::engine::{EngineSettings, MetricsEngine};
use crate::data_loading::ScreeningTable;
use crate::error::{ValidationError, ValidationResult};
use crate::evaluation::RankedSeries;
use crate::plotting::PlotType;

/// Builder pre konfiguráciu MetricsEngine
pub struct MetricsEngineBuilder {
    active: Option<String>,
    predict: Option<String>,
    model: Option<String>,
    scores: Option<String>,
    auc_thresh: f64,
    rescore: Option<String>,
    plot_type: PlotType,
    figsize: Option<(f64, f64)>,
}

impl MetricsEngineBuilder {
    pub fn new() -> Self {
        Self {
            active: None,
            predict: None,
            model: None,
            scores: None,
            auc_thresh: DEFAULT_AUC_THRESH,
            rescore: None,
            plot_type: PlotType::default(),
            figsize: None,
        }
    }

    /// Stĺpec so skutočnou aktivitou (1 = aktívna, 0 = decoy)
    pub fn active(mut self, column: &str) -> Self {
        self.active = Some(column.to_string());
        self
    }

    /// Stĺpec s binárnou predikciou modelu
    pub fn predict(mut self, column: &str) -> Self {
        self.predict = Some(column.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    /// Stĺpec so skóre. Ak nie je nastavený, použije sa `{model}_rescore`
    pub fn scores(mut self, column: &str) -> Self {
        self.scores = Some(column.to_string());
        self
    }

    /// Minimálne AUCROC, pri ktorom sa kreslia grafy
    pub fn auc_thresh(mut self, thresh: f64) -> Self {
        self.auc_thresh = thresh;
        self
    }

    pub fn rescore(mut self, column: &str) -> Self {
        self.rescore = Some(column.to_string());
        self
    }

    pub fn plot_type(mut self, plot_type: PlotType) -> Self {
        self.plot_type = plot_type;
        self
    }

    /// Veľkosť figúry v palcoch
    pub fn figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = Some((width, height));
        self
    }

    /// Vytvorí MetricsEngine nad tabuľkou, overí konfiguráciu aj existenciu stĺpcov
    pub fn build<'a>(self, table: &'a ScreeningTable) -> ValidationResult<MetricsEngine<'a>> {
        let model = self
            .model
            .ok_or_else(|| ValidationError::InvalidConfig("Model musí byť nastavený".to_string()))?;
        let active = self.active.ok_or_else(|| {
            ValidationError::InvalidConfig("Stĺpec s aktivitou (active) musí byť nastavený".to_string())
        })?;
        let predict = self.predict.ok_or_else(|| {
            ValidationError::InvalidConfig("Stĺpec s predikciou (predict) musí byť nastavený".to_string())
        })?;
        let scores = self.scores.unwrap_or_else(|| format!("{}_rescore", model));

        if !self.auc_thresh.is_finite() {
            return Err(ValidationError::InvalidConfig(format!(
                "auc_thresh musí byť konečné číslo, zadané: {}",
                self.auc_thresh
            )));
        }
        if let Some((w, h)) = self.figsize {
            if !(w > 0.0 && h > 0.0) {
                return Err(ValidationError::InvalidConfig(format!(
                    "Veľkosť figúry musí byť kladná, zadaná: ({}, {})",
                    w, h
                )));
            }
        }

        let labels = table.column(&active)?;
        let predictions = table.column(&predict)?;
        let score_values = table.column(&scores)?;
        if let Some(rescore) = &self.rescore {
            table.column(rescore)?;
        }

        let series = RankedSeries::new(labels, predictions, score_values)
            .map_err(|e| ValidationError::metric(&model, e))?;

        log::debug!(
            "MetricsEngine pre model '{}': {} vzoriek, {} aktívnych, skóre '{}'",
            model,
            series.len(),
            series.num_actives(),
            scores
        );

        Ok(MetricsEngine::new(
            table,
            series,
            EngineSettings {
                active,
                predict,
                model,
                scores,
                auc_thresh: self.auc_thresh,
                rescore: self.rescore,
                plot_type: self.plot_type,
                figsize: self.figsize,
            },
        ))
    }
}

impl Default for MetricsEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScreeningTable {
        ScreeningTable::from_columns(vec![
            ("Active".to_string(), vec![1.0, 0.0, 1.0, 0.0]),
            ("predict".to_string(), vec![1.0, 0.0, 0.0, 0.0]),
            ("m_rescore".to_string(), vec![0.9, 0.4, 0.7, 0.1]),
            ("docking".to_string(), vec![-9.0, -5.0, -8.0, -4.0]),
        ])
        .unwrap()
    }

    fn base() -> MetricsEngineBuilder {
        MetricsEngineBuilder::new().active("Active").predict("predict").model("m")
    }

    #[test]
    fn score_column_defaults_to_model_rescore() {
        let table = table();
        let engine = base().build(&table).unwrap();
        assert_eq!(engine.settings().scores, "m_rescore");
        assert_eq!(engine.settings().plot_type, PlotType::Auc);
        assert_eq!(engine.settings().auc_thresh, 0.5);
    }

    #[test]
    fn model_is_required() {
        let table = table();
        let result = MetricsEngineBuilder::new().active("Active").predict("predict").build(&table);
        assert!(matches!(result, Err(ValidationError::InvalidConfig(_))));
    }

    #[test]
    fn missing_columns_are_reported() {
        let table = table();
        let err = base().scores("missing").build(&table).err().unwrap();
        match err {
            ValidationError::ColumnNotFound { column, available } => {
                assert_eq!(column, "missing");
                assert!(available.contains(&"m_rescore".to_string()));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(matches!(
            base().rescore("nope").build(&table),
            Err(ValidationError::ColumnNotFound { .. })
        ));
        assert!(base().rescore("docking").build(&table).is_ok());
    }

    #[test]
    fn invalid_labels_name_the_model() {
        let table = ScreeningTable::from_columns(vec![
            ("Active".to_string(), vec![1.0, 2.0]),
            ("predict".to_string(), vec![1.0, 0.0]),
            ("m_rescore".to_string(), vec![0.9, 0.4]),
        ])
        .unwrap();
        let err = base().build(&table).err().unwrap();
        assert!(err.to_string().contains("'m'"));
        assert!(err.metric_error().is_some());
    }

    #[test]
    fn rejects_non_positive_figsize() {
        let table = table();
        assert!(base().figsize(0.0, 5.0).build(&table).is_err());
        assert!(base().figsize(10.0, 8.0).build(&table).is_ok());
    }
}
