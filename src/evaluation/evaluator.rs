use crate::error::{MetricError, MetricResult};

/// Confusion matrix pre binárnu klasifikáciu (TP, TN, FP, FN)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// Spočíta confusion matrix z (label, tvrdá predikcia) párov
    pub fn from_labels(y_true: &[bool], y_pred: &[bool]) -> MetricResult<Self> {
        if y_true.len() != y_pred.len() {
            return Err(MetricError::LengthMismatch {
                left: y_true.len(),
                right: y_pred.len(),
            });
        }

        let mut cm = ConfusionMatrix::default();
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            match (t, p) {
                (true, true) => cm.tp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
            }
        }
        Ok(cm)
    }

    /// Sensitivity (recall pozitívnej triedy) = TP / (TP + FN)
    pub fn sensitivity(&self) -> MetricResult<f64> {
        ratio("Sensitivity", self.tp, self.tp + self.fn_, "dáta neobsahujú žiadne aktívne látky")
    }

    /// Specificity (recall negatívnej triedy) = TN / (TN + FP)
    pub fn specificity(&self) -> MetricResult<f64> {
        ratio("Specificity", self.tn, self.tn + self.fp, "dáta neobsahujú žiadne decoys")
    }

    /// Precision = TP / (TP + FP)
    pub fn precision(&self) -> MetricResult<f64> {
        ratio("Precision", self.tp, self.tp + self.fp, "model nepredikoval žiadnu aktívnu látku")
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }
}

fn ratio(metric: &'static str, num: usize, den: usize, reason: &str) -> MetricResult<f64> {
    if den == 0 {
        return Err(MetricError::degenerate(metric, reason));
    }
    Ok(num as f64 / den as f64)
}

/// Recall pre zvolenú triedu (`pos_label = true` je sensitivity, `false` specificity)
pub fn recall(y_true: &[bool], y_pred: &[bool], pos_label: bool) -> MetricResult<f64> {
    let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
    if pos_label {
        cm.sensitivity()
    } else {
        cm.specificity()
    }
}

/// Precision pozitívnej triedy
pub fn precision(y_true: &[bool], y_pred: &[bool]) -> MetricResult<f64> {
    ConfusionMatrix::from_labels(y_true, y_pred)?.precision()
}

/// Harmonický priemer precision a sensitivity
pub fn f1_score(precision: f64, sensitivity: f64) -> MetricResult<f64> {
    let sum = precision + sensitivity;
    if sum == 0.0 {
        return Err(MetricError::degenerate("F1", "precision + sensitivity = 0"));
    }
    Ok(2.0 * precision * sensitivity / sum)
}

/// GH skóre: (0.75 * precision + 0.25 * sensitivity) * specificity
pub fn gh_score(precision: f64, sensitivity: f64, specificity: f64) -> f64 {
    (0.75 * precision + 0.25 * sensitivity) * specificity
}

/// Zaokrúhlenie na 3 desatinné miesta (tak ako vo výslednej tabuľke)
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
