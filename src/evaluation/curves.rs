//! ROC a precision-recall krivky, lichobežníková AUC a average precision.
//!
//! Sémantika zodpovedá štandardným implementáciám: body kriviek sa tvoria len
//! na rozlíšiteľných prahoch (zhodné skóre tvoria jeden bod), ROC vynecháva
//! kolineárne medzibody a PR krivka končí bodom (recall 0, precision 1).

use super::series::{check_aligned, descending_order};
use crate::error::{MetricError, MetricResult};

/// ROC krivka (FPR, TPR, prahy). Prvý bod je (0, 0) s prahom +inf.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

/// Precision-recall krivka zoradená podľa klesajúceho recall.
/// `thresholds` má o jeden prvok menej ako `precision`/`recall`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecisionRecallCurve {
    pub precision: Vec<f64>,
    pub recall: Vec<f64>,
    pub thresholds: Vec<f64>,
}

/// Kumulatívne (FP, TP) na každom rozlíšiteľnom prahu, prahy zostupne
struct ClfCurve {
    fps: Vec<f64>,
    tps: Vec<f64>,
    thresholds: Vec<f64>,
}

fn binary_clf_curve(y_true: &[bool], y_score: &[f64]) -> MetricResult<ClfCurve> {
    check_aligned(y_true, y_score)?;
    if y_true.is_empty() {
        return Err(MetricError::EmptyInput("curve"));
    }

    let order = descending_order(y_score);
    let mut fps = Vec::new();
    let mut tps = Vec::new();
    let mut thresholds = Vec::new();
    let (mut tp, mut fp) = (0.0, 0.0);

    for (pos, &idx) in order.iter().enumerate() {
        if y_true[idx] {
            tp += 1.0;
        } else {
            fp += 1.0;
        }

        // bod vzniká až za poslednou vzorkou so zhodným skóre
        let last_of_group = order
            .get(pos + 1)
            .map(|&next| y_score[next] != y_score[idx])
            .unwrap_or(true);
        if last_of_group {
            fps.push(fp);
            tps.push(tp);
            thresholds.push(y_score[idx]);
        }
    }

    Ok(ClfCurve { fps, tps, thresholds })
}

/// ROC krivka. Bez aktívnych látok alebo bez decoys nie je definovaná.
pub fn roc_curve(y_true: &[bool], y_score: &[f64]) -> MetricResult<RocCurve> {
    let curve = binary_clf_curve(y_true, y_score)?;
    let total_fp = *curve.fps.last().unwrap_or(&0.0);
    let total_tp = *curve.tps.last().unwrap_or(&0.0);

    if total_tp == 0.0 {
        return Err(MetricError::degenerate("ROC", "žiadne aktívne látky, TPR nie je definované"));
    }
    if total_fp == 0.0 {
        return Err(MetricError::degenerate("ROC", "žiadne decoys, FPR nie je definované"));
    }

    // Vynechanie kolineárnych medzibodov (druhá diferencia je nulová)
    let n = curve.fps.len();
    let keep: Vec<usize> = (0..n)
        .filter(|&i| {
            if i == 0 || i == n - 1 {
                return true;
            }
            let d2_fp = curve.fps[i + 1] - 2.0 * curve.fps[i] + curve.fps[i - 1];
            let d2_tp = curve.tps[i + 1] - 2.0 * curve.tps[i] + curve.tps[i - 1];
            d2_fp != 0.0 || d2_tp != 0.0
        })
        .collect();

    let mut fpr = Vec::with_capacity(keep.len() + 1);
    let mut tpr = Vec::with_capacity(keep.len() + 1);
    let mut thresholds = Vec::with_capacity(keep.len() + 1);
    fpr.push(0.0);
    tpr.push(0.0);
    thresholds.push(f64::INFINITY);

    for i in keep {
        fpr.push(curve.fps[i] / total_fp);
        tpr.push(curve.tps[i] / total_tp);
        thresholds.push(curve.thresholds[i]);
    }

    Ok(RocCurve { fpr, tpr, thresholds })
}

/// Precision-recall krivka (recall zostupne, na konci bod (0, 1))
pub fn precision_recall_curve(y_true: &[bool], y_score: &[f64]) -> MetricResult<PrecisionRecallCurve> {
    let curve = binary_clf_curve(y_true, y_score)?;
    let total_tp = *curve.tps.last().unwrap_or(&0.0);
    if total_tp == 0.0 {
        return Err(MetricError::degenerate("PrecisionRecall", "žiadne aktívne látky"));
    }

    let n = curve.tps.len();
    let mut precision = Vec::with_capacity(n + 1);
    let mut recall = Vec::with_capacity(n + 1);
    let mut thresholds = Vec::with_capacity(n);

    for i in (0..n).rev() {
        let predicted = curve.tps[i] + curve.fps[i];
        precision.push(curve.tps[i] / predicted);
        recall.push(curve.tps[i] / total_tp);
        thresholds.push(curve.thresholds[i]);
    }
    precision.push(1.0);
    recall.push(0.0);

    Ok(PrecisionRecallCurve {
        precision,
        recall,
        thresholds,
    })
}

/// Average precision = Σ (R_n - R_{n-1}) * P_n cez prahy zostupne
pub fn average_precision(y_true: &[bool], y_score: &[f64]) -> MetricResult<f64> {
    let curve = binary_clf_curve(y_true, y_score)?;
    let total_tp = *curve.tps.last().unwrap_or(&0.0);
    if total_tp == 0.0 {
        return Err(MetricError::degenerate("AP", "žiadne aktívne látky"));
    }

    let mut ap = 0.0;
    let mut prev_recall = 0.0;
    for (&tp, &fp) in curve.tps.iter().zip(curve.fps.iter()) {
        let recall = tp / total_tp;
        let precision = tp / (tp + fp);
        ap += (recall - prev_recall) * precision;
        prev_recall = recall;
    }
    Ok(ap)
}

/// Plocha pod krivkou lichobežníkovým pravidlom.
/// `x` musí byť monotónne (rastúce alebo klesajúce).
pub fn trapezoidal_auc(x: &[f64], y: &[f64]) -> MetricResult<f64> {
    if x.len() != y.len() {
        return Err(MetricError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(MetricError::InvalidParameter(format!(
            "na výpočet AUC sú potrebné aspoň 2 body, dostupné: {}",
            x.len()
        )));
    }

    let direction = if x.windows(2).all(|w| w[1] >= w[0]) {
        1.0
    } else if x.windows(2).all(|w| w[1] <= w[0]) {
        -1.0
    } else {
        return Err(MetricError::NonMonotonic);
    };

    let area: f64 = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| (xw[1] - xw[0]) * (yw[0] + yw[1]) / 2.0)
        .sum();

    Ok(direction * area)
}
