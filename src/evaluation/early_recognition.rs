//! Metriky "early recognition" pre virtual screening.
//!
//! Všetky funkcie si ranking počítajú samé (stabilné zostupné triedenie podľa skóre),
//! poradie riadkov na vstupe teda nehrá rolu okrem zhodných skóre.
//!
//! Referencie:
//! - RIE: Sheridan, R. P. et al., J. Chem. Inf. Comput. Sci. 2001, 41, 1395-1406.
//! - BEDROC: Truchon, J.-F.; Bayly, C. I., J. Chem. Inf. Model. 2007, 47, 488-508.

use log::{debug, warn};

use super::curves::{roc_curve, trapezoidal_auc};
use super::series::{check_aligned, descending_order, positive_mask};
use crate::error::{MetricError, MetricResult};

/// Alfa pre RIE/BEDROC používaná vo validačnej tabuľke
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Frakcia pre EF vo validačnej tabuľke (EF1%)
pub const EF_FRACTION: f64 = 0.01;

/// Orientácia skóre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrientation {
    /// Väčšie skóre = aktívnejšia látka (rescore, pravdepodobnosť)
    Descending,
    /// Skóre rastie s klesajúcou aktivitou (docking energia, RMSD)
    Ascending,
}

/// Parametre semi-log ROC AUC
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogAucParams {
    pub orientation: ScoreOrientation,
    /// FPR pod touto hodnotou sa oreže (log(0) nie je definovaný)
    pub log_min: f64,
    /// FPR nad touto hodnotou sa ignoruje
    pub log_max: f64,
}

impl Default for LogAucParams {
    fn default() -> Self {
        Self {
            orientation: ScoreOrientation::Ascending,
            log_min: 0.001,
            log_max: 1.0,
        }
    }
}

impl LogAucParams {
    pub fn descending() -> Self {
        Self {
            orientation: ScoreOrientation::Descending,
            ..Self::default()
        }
    }
}

/// Enrichment factor na frakcii `fraction` (napr. 0.01 pre EF1%).
///
/// Vzorky sa zoradia podľa skóre zostupne, do top sa berie `floor(N * fraction)`
/// vzoriek. Pri zhode skóre na hranici rozhoduje vstupné poradie riadkov.
pub fn enrichment_factor(y_true: &[bool], y_score: &[f64], fraction: f64) -> MetricResult<f64> {
    check_aligned(y_true, y_score)?;
    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(MetricError::InvalidParameter(format!(
            "frakcia pre EF musí byť v (0, 1], zadaná: {}",
            fraction
        )));
    }

    let total_actives = y_true.iter().filter(|&&a| a).count();
    if total_actives == 0 {
        return Err(MetricError::degenerate("EF", "dáta neobsahujú žiadne aktívne látky"));
    }

    let num_top = (y_true.len() as f64 * fraction).floor() as usize;
    if num_top == 0 {
        warn!(
            "EF{}%: top frakcia je prázdna pri {} vzorkách, EF = 0",
            fraction * 100.0,
            y_true.len()
        );
    }

    let actives_top = descending_order(y_score)
        .into_iter()
        .take(num_top)
        .filter(|&idx| y_true[idx])
        .count();

    Ok(actives_top as f64 / (total_actives as f64 * fraction))
}

/// Robust Initial Enhancement.
///
/// `observed = Σ exp(-α·rank/N)` cez 1-based ranky aktívnych látok,
/// `expected = ra·(1 - exp(-α)) / (exp(α/N) - 1)`.
/// 1/α by mala zodpovedať frakcii, ktorá nás pri EF zaujíma.
pub fn rie(y_true: &[bool], y_score: &[f64], alpha: f64) -> MetricResult<f64> {
    check_aligned(y_true, y_score)?;
    if !(alpha > 0.0) || !alpha.is_finite() {
        return Err(MetricError::InvalidParameter(format!(
            "alpha musí byť kladné číslo, zadané: {}",
            alpha
        )));
    }
    if y_true.is_empty() {
        return Err(MetricError::EmptyInput("RIE"));
    }

    let n = y_true.len() as f64;
    let actives = y_true.iter().filter(|&&a| a).count();
    if actives == 0 {
        return Err(MetricError::degenerate("RIE", "dáta neobsahujú žiadne aktívne látky"));
    }
    let ra = actives as f64 / n;

    let observed: f64 = descending_order(y_score)
        .into_iter()
        .enumerate()
        .filter(|&(_, idx)| y_true[idx])
        .map(|(rank, _)| (-alpha * (rank + 1) as f64 / n).exp())
        .sum();
    let expected = ra * -(-alpha).exp_m1() / (alpha / n).exp_m1();

    let score = observed / expected;
    if !score.is_finite() {
        return Err(MetricError::degenerate("RIE", format!("nekonečný výsledok pre alpha = {}", alpha)));
    }
    Ok(score)
}

/// RIE nad surovým stĺpcom aktivity, pozitívna trieda sú hodnoty rovné `pos_label`
pub fn rie_with_label(y_true: &[f64], y_score: &[f64], alpha: f64, pos_label: f64) -> MetricResult<f64> {
    rie(&positive_mask(y_true, pos_label), y_score, alpha)
}

/// Boltzmann-Enhanced Discrimination of ROC.
///
/// Druhý člen `1 / (1 - exp(α·ri))` je singulárny pre `ri → 0` (takmer všetky
/// vzorky aktívne). Vstup sa nestráži, nekonečný výsledok je chyba.
pub fn bedroc(y_true: &[bool], y_score: &[f64], alpha: f64) -> MetricResult<f64> {
    let rie_score = rie(y_true, y_score, alpha)?;

    let ra = y_true.iter().filter(|&&a| a).count() as f64 / y_true.len() as f64;
    let ri = 1.0 - ra;
    let half = alpha / 2.0;

    let score = rie_score * ra * half.sinh() / (half.cosh() - (half - alpha * ra).cosh())
        + 1.0 / (1.0 - (alpha * ri).exp());

    if !score.is_finite() {
        return Err(MetricError::degenerate(
            "BEDROC",
            format!("singulárny člen pre podiel decoys ri = {}", ri),
        ));
    }
    Ok(score)
}

pub fn bedroc_with_label(y_true: &[f64], y_score: &[f64], alpha: f64, pos_label: f64) -> MetricResult<f64> {
    bedroc(&positive_mask(y_true, pos_label), y_score, alpha)
}

/// Plocha pod semi-log ROC krivkou.
///
/// FPR sa oreže na `log_min`, body s FPR > `log_max` sa vynechajú a os sa
/// transformuje na `1 - log10(fpr) / log10(log_min)`.
pub fn roc_log_auc(y_true: &[bool], y_score: &[f64], params: LogAucParams) -> MetricResult<f64> {
    if !(params.log_min > 0.0 && params.log_min < params.log_max && params.log_max <= 1.0) {
        return Err(MetricError::InvalidParameter(format!(
            "musí platiť 0 < log_min < log_max <= 1, zadané: log_min = {}, log_max = {}",
            params.log_min, params.log_max
        )));
    }

    let roc = match params.orientation {
        ScoreOrientation::Descending => roc_curve(y_true, y_score)?,
        ScoreOrientation::Ascending => {
            let negated: Vec<f64> = y_score.iter().map(|s| -s).collect();
            roc_curve(y_true, &negated)?
        }
    };

    let clipped = roc.fpr.iter().filter(|&&f| f < params.log_min).count();
    if clipped > 0 {
        debug!("logAUC: {} bodov FPR orezaných na log_min = {}", clipped, params.log_min);
    }

    let log_min_10 = params.log_min.log10();
    let (log_fpr, tpr): (Vec<f64>, Vec<f64>) = roc
        .fpr
        .iter()
        .zip(roc.tpr.iter())
        .map(|(&f, &t)| (f.max(params.log_min), t))
        .filter(|&(f, _)| f <= params.log_max)
        .map(|(f, t)| (1.0 - f.log10() / log_min_10, t))
        .unzip();

    trapezoidal_auc(&log_fpr, &tpr)
}
