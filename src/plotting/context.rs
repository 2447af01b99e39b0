use std::fmt;
use std::path::Path;
use std::str::FromStr;

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};

use super::charts;
use crate::error::{ValidationError, ValidationResult};

/// Ktoré grafy sa majú vykresliť po validácii
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    /// Len ROC krivka
    #[default]
    Auc,
    /// Len precision-recall krivka
    Ap,
    /// ROC a PR vedľa seba
    Both,
}

impl FromStr for PlotType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auc" | "roc" => Ok(PlotType::Auc),
            "ap" | "pr" => Ok(PlotType::Ap),
            "both" => Ok(PlotType::Both),
            _ => Err(ValidationError::InvalidConfig(format!(
                "Neznámy typ grafu: {} (povolené: auc, ap, both)",
                s
            ))),
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlotType::Auc => "auc",
            PlotType::Ap => "ap",
            PlotType::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// Jedna krivka s legendou
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl CurveSeries {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Predvolená veľkosť plátna v palcoch (ako matplotlib)
pub const DEFAULT_FIGSIZE: (f64, f64) = (6.4, 4.8);
const PIXELS_PER_INCH: f64 = 100.0;
const FIGURE_BACKGROUND: RGBColor = RGBColor(0xF0, 0xF6, 0xFC);
const PLAIN_BACKGROUND: RGBColor = RGBColor(0xFF, 0xFF, 0xFF);

/// Explicitné plátno pre grafy. Viacero modelov môže kresliť do toho istého
/// kontextu (napr. porovnanie ROC kriviek), poradie určuje volajúci.
#[derive(Debug, Clone)]
pub struct RenderContext {
    figsize: (f64, f64),
    background: RGBColor,
    roc_series: Vec<CurveSeries>,
    pr_series: Vec<CurveSeries>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            figsize: DEFAULT_FIGSIZE,
            background: PLAIN_BACKGROUND,
            roc_series: Vec::new(),
            pr_series: Vec::new(),
        }
    }

    /// Kontext so zadanou veľkosťou (palce) a farebným pozadím
    pub fn with_figsize(width: f64, height: f64) -> ValidationResult<Self> {
        let mut ctx = Self::new();
        ctx.apply_figsize((width, height))?;
        Ok(ctx)
    }

    /// Nastaví veľkosť plátna, zadaná veľkosť prepína aj pozadie figúry
    pub fn apply_figsize(&mut self, figsize: (f64, f64)) -> ValidationResult<()> {
        let (w, h) = figsize;
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(ValidationError::InvalidConfig(format!(
                "Veľkosť figúry musí byť kladná, zadaná: {:?}",
                figsize
            )));
        }
        self.figsize = figsize;
        self.background = FIGURE_BACKGROUND;
        Ok(())
    }

    pub fn add_roc(&mut self, label: impl Into<String>, fpr: &[f64], tpr: &[f64]) {
        self.roc_series.push(CurveSeries {
            label: label.into(),
            x: fpr.to_vec(),
            y: tpr.to_vec(),
        });
    }

    pub fn add_precision_recall(&mut self, label: impl Into<String>, recall: &[f64], precision: &[f64]) {
        self.pr_series.push(CurveSeries {
            label: label.into(),
            x: recall.to_vec(),
            y: precision.to_vec(),
        });
    }

    pub fn roc_series(&self) -> &[CurveSeries] {
        &self.roc_series
    }

    pub fn pr_series(&self) -> &[CurveSeries] {
        &self.pr_series
    }

    pub fn is_empty(&self) -> bool {
        self.roc_series.is_empty() && self.pr_series.is_empty()
    }

    /// Zahodí nakreslené krivky, veľkosť a pozadie ostávajú
    pub fn clear(&mut self) {
        self.roc_series.clear();
        self.pr_series.clear();
    }

    pub fn figsize(&self) -> (f64, f64) {
        self.figsize
    }

    pub(crate) fn background(&self) -> RGBColor {
        self.background
    }

    /// Rozmer jedného panelu v pixeloch
    pub(crate) fn panel_size(&self) -> (u32, u32) {
        (
            (self.figsize.0 * PIXELS_PER_INCH).round() as u32,
            (self.figsize.1 * PIXELS_PER_INCH).round() as u32,
        )
    }

    /// Vykreslí všetky krivky do SVG (ROC a PR vedľa seba, ak sú obe)
    pub fn render_svg(&self) -> ValidationResult<String> {
        charts::render_svg(self)
    }

    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> ValidationResult<()> {
        let svg = self.render_svg()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("Graf uložený do {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_type_parsing() {
        assert_eq!("auc".parse::<PlotType>().unwrap(), PlotType::Auc);
        assert_eq!("AP".parse::<PlotType>().unwrap(), PlotType::Ap);
        assert_eq!("both".parse::<PlotType>().unwrap(), PlotType::Both);
        assert!("scatter".parse::<PlotType>().is_err());
        assert_eq!(PlotType::Both.to_string(), "both");
    }

    #[test]
    fn plot_type_serde_is_lowercase() {
        let parsed: PlotType = serde_json::from_str("\"both\"").unwrap();
        assert_eq!(parsed, PlotType::Both);
        assert_eq!(serde_json::to_string(&PlotType::Ap).unwrap(), "\"ap\"");
    }

    #[test]
    fn figsize_switches_background_and_size() {
        let ctx = RenderContext::with_figsize(10.0, 8.0).unwrap();
        assert_eq!(ctx.panel_size(), (1000, 800));
        assert_eq!(ctx.background(), FIGURE_BACKGROUND);
        assert_eq!(RenderContext::new().background(), PLAIN_BACKGROUND);
        assert!(RenderContext::with_figsize(0.0, 8.0).is_err());
    }

    #[test]
    fn collects_series_per_panel() {
        let mut ctx = RenderContext::new();
        assert!(ctx.is_empty());
        ctx.add_roc("m1 (AUC = 0.840)", &[0.0, 1.0], &[0.0, 1.0]);
        ctx.add_precision_recall("m1 (AP = 0.681)", &[1.0, 0.0], &[0.25, 1.0]);

        assert_eq!(ctx.roc_series().len(), 1);
        assert_eq!(ctx.pr_series()[0].points().collect::<Vec<_>>(), vec![(1.0, 0.25), (0.0, 1.0)]);

        ctx.clear();
        assert!(ctx.is_empty());
    }
}
