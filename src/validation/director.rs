use serde::Serialize;

use super::builder::MetricsEngineBuilder;
use super::config::{ValidationConfig, DEFAULT_ACTIVE_COLUMN, DEFAULT_PREDICT_COLUMN};
use super::engine::MetricsEngine;
use crate::data_loading::{DataLoaderFactory, ScreeningTable};
use crate::error::ValidationResult;
use crate::evaluation::{MetricRecord, MetricTable};
use crate::plotting::{PlotType, RenderContext};

/// Hotové "recepty" na validáciu farmakoforových modelov
pub struct ValidationDirector;

impl ValidationDirector {
    /// Štandardné stĺpce výstupu screeningu: "Active", "predict", "{model}_rescore"
    pub fn standard<'a>(table: &'a ScreeningTable, model: &str) -> ValidationResult<MetricsEngine<'a>> {
        Self::standard_builder(model).build(table)
    }

    /// Štandardné stĺpce, ROC aj PR krivka vedľa seba
    pub fn standard_with_curves<'a>(
        table: &'a ScreeningTable,
        model: &str,
    ) -> ValidationResult<MetricsEngine<'a>> {
        Self::standard_builder(model).plot_type(PlotType::Both).build(table)
    }

    /// Builder s predvyplnenými štandardnými stĺpcami na ďalšie úpravy
    pub fn standard_builder(model: &str) -> MetricsEngineBuilder {
        MetricsEngineBuilder::new()
            .active(DEFAULT_ACTIVE_COLUMN)
            .predict(DEFAULT_PREDICT_COLUMN)
            .model(model)
    }

    pub fn from_config<'a>(
        table: &'a ScreeningTable,
        config: &ValidationConfig,
    ) -> ValidationResult<MetricsEngine<'a>> {
        config.clone().into_builder().build(table)
    }

    /// Validuje viacero modelov nad tou istou tabuľkou, krivky idú do
    /// spoločného kontextu v poradí konfigurácií. Prvá chyba sa vráti.
    pub fn compare_models(
        table: &ScreeningTable,
        configs: &[ValidationConfig],
        ctx: &mut RenderContext,
    ) -> ValidationResult<MetricTable> {
        let mut results = MetricTable::new();
        for config in configs {
            let mut engine = Self::from_config(table, config)?;
            results.push(engine.validation(ctx)?);
        }
        log::info!("Porovnaných {} modelov", results.len());
        Ok(results)
    }

    /// Načíta surové dáta (CSV/JSON, `format = "auto"` pre detekciu) a zvaliduje model
    pub fn validate_from_text(
        data: &str,
        format: &str,
        config: &ValidationConfig,
        ctx: &mut RenderContext,
    ) -> ValidationResult<MetricRecord> {
        let table = Self::load_table(data, format)?;
        let mut engine = Self::from_config(&table, config)?;
        engine.validation(ctx)
    }

    /// Načítanie tabuľky cez factory
    pub fn load_table(data: &str, format: &str) -> ValidationResult<ScreeningTable> {
        let mut loader = if format == "auto" {
            DataLoaderFactory::create_auto(data)?
        } else {
            DataLoaderFactory::create(format)?
        };
        log::debug!("Načítavam dáta cez {}", loader.get_name());
        loader.load_from_string(data)
    }

    /// Dostupné predpripravené konfigurácie
    pub fn available_presets() -> Vec<PresetInfo> {
        vec![
            PresetInfo {
                name: "standard",
                description: "Stĺpce Active/predict/{model}_rescore, ROC krivka",
                plot_type: PlotType::Auc,
            },
            PresetInfo {
                name: "standard_with_curves",
                description: "Stĺpce Active/predict/{model}_rescore, ROC aj PR krivka",
                plot_type: PlotType::Both,
            },
            PresetInfo {
                name: "custom",
                description: "Vlastná konfigurácia cez ValidationConfig (JSON)",
                plot_type: PlotType::Auc,
            },
        ]
    }
}

/// Informácie o prednastavenej konfigurácii
#[derive(Debug, Clone, Serialize)]
pub struct PresetInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub plot_type: PlotType,
}
