use crate::error::{MetricError, MetricResult};

/// Pozitívna trieda (aktívna látka)
pub const POSITIVE_LABEL: f64 = 1.0;

/// Zoraditeľná séria jedného modelu: label, tvrdá predikcia a skóre na riadok.
/// Vstupné poradie nie je podstatné, ranking sa počíta interne.
#[derive(Debug, Clone)]
pub struct RankedSeries {
    labels: Vec<bool>,
    predictions: Vec<bool>,
    scores: Vec<f64>,
}

impl RankedSeries {
    /// Validuje a zarovná stĺpce (labels/predictions musia byť 0/1, skóre konečné)
    pub fn new(labels: &[f64], predictions: &[f64], scores: &[f64]) -> MetricResult<Self> {
        if labels.len() != predictions.len() {
            return Err(MetricError::LengthMismatch {
                left: labels.len(),
                right: predictions.len(),
            });
        }
        if labels.len() != scores.len() {
            return Err(MetricError::LengthMismatch {
                left: labels.len(),
                right: scores.len(),
            });
        }
        if labels.is_empty() {
            return Err(MetricError::EmptyInput("RankedSeries"));
        }

        Ok(Self {
            labels: binary_mask(labels)?,
            predictions: binary_mask(predictions)?,
            scores: finite_scores(scores)?,
        })
    }

    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    pub fn predictions(&self) -> &[bool] {
        &self.predictions
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn num_actives(&self) -> usize {
        self.labels.iter().filter(|&&a| a).count()
    }
}

/// Prevedie 0/1 stĺpec na bool masku, iné hodnoty sú chyba
pub fn binary_mask(values: &[f64]) -> MetricResult<Vec<bool>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value == POSITIVE_LABEL {
                Ok(true)
            } else if value == 0.0 {
                Ok(false)
            } else {
                Err(MetricError::InvalidLabel { index, value })
            }
        })
        .collect()
}

/// Maska `y_true == pos_label`, ostatné hodnoty sú negatívna trieda
pub fn positive_mask(values: &[f64], pos_label: f64) -> Vec<bool> {
    values.iter().map(|&v| v == pos_label).collect()
}

pub(crate) fn finite_scores(scores: &[f64]) -> MetricResult<Vec<f64>> {
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(MetricError::NonFiniteScore { index, value });
    }
    Ok(scores.to_vec())
}

/// Rovnaká dĺžka labelov a skóre, skóre musia byť konečné
pub(crate) fn check_aligned(labels: &[bool], scores: &[f64]) -> MetricResult<()> {
    if labels.len() != scores.len() {
        return Err(MetricError::LengthMismatch {
            left: labels.len(),
            right: scores.len(),
        });
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(MetricError::NonFiniteScore { index, value });
    }
    Ok(())
}

/// Indexy zoradené podľa skóre zostupne. Triedenie je stabilné:
/// pri zhode skóre ostáva vstupné poradie riadkov.
pub fn descending_order(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_binary_columns() {
        let series = RankedSeries::new(&[1.0, 0.0, 1.0], &[1.0, 1.0, 0.0], &[0.3, 0.2, 0.1]).unwrap();
        assert_eq!(series.labels(), &[true, false, true]);
        assert_eq!(series.predictions(), &[true, true, false]);
        assert_eq!(series.num_actives(), 2);

        let err = RankedSeries::new(&[1.0, 2.0], &[1.0, 0.0], &[0.3, 0.2]).unwrap_err();
        assert_eq!(err, MetricError::InvalidLabel { index: 1, value: 2.0 });
    }

    #[test]
    fn rejects_misaligned_and_non_finite_input() {
        assert!(matches!(
            RankedSeries::new(&[1.0, 0.0], &[1.0], &[0.3, 0.2]),
            Err(MetricError::LengthMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(
            RankedSeries::new(&[1.0, 0.0], &[1.0, 0.0], &[0.3, f64::NAN]),
            Err(MetricError::NonFiniteScore { index: 1, .. })
        ));
        assert!(matches!(
            RankedSeries::new(&[], &[], &[]),
            Err(MetricError::EmptyInput(_))
        ));
    }

    #[test]
    fn descending_order_is_stable_on_ties() {
        let order = descending_order(&[0.5, 0.9, 0.5, 0.1, 0.9]);
        assert_eq!(order, vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn aligned_scores_must_be_finite() {
        assert!(check_aligned(&[true, false], &[0.3, 0.1]).is_ok());
        assert_eq!(
            check_aligned(&[true, false, true], &[0.3, f64::INFINITY, 0.1]),
            Err(MetricError::NonFiniteScore { index: 1, value: f64::INFINITY })
        );
        assert!(matches!(
            check_aligned(&[true], &[0.3, 0.1]),
            Err(MetricError::LengthMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn positive_mask_uses_custom_label() {
        assert_eq!(positive_mask(&[-1.0, 1.0, -1.0], -1.0), vec![true, false, true]);
    }
}
