//! Vlastnosti ranking metrík: invariancia voči poradiu riadkov a monotónnej
//! transformácii skóre, limity RIE/EF a náhodný ranking.

use approx::assert_abs_diff_eq;
use pharmacophore_validation::evaluation::{
    average_precision, bedroc, enrichment_factor, rie, roc_curve, roc_log_auc, trapezoidal_auc,
    LogAucParams,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn auc(y: &[bool], s: &[f64]) -> f64 {
    let roc = roc_curve(y, s).unwrap();
    trapezoidal_auc(&roc.fpr, &roc.tpr).unwrap()
}

/// Labels s aspoň jednou aktívnou látkou aj decoy a odlišné skóre ako permutácia 0..n
fn screen_strategy() -> impl Strategy<Value = (Vec<bool>, Vec<f64>, Vec<usize>)> {
    prop::collection::vec(any::<bool>(), 5..60)
        .prop_filter("aspoň jedna aktívna látka a jeden decoy", |labels| {
            labels.iter().any(|&a| a) && labels.iter().any(|&a| !a)
        })
        .prop_flat_map(|labels| {
            let n = labels.len();
            let ranks: Vec<usize> = (0..n).collect();
            (
                Just(labels),
                Just(ranks.clone()).prop_shuffle(),
                Just(ranks).prop_shuffle(),
            )
        })
        .prop_map(|(labels, ranks, perm)| {
            let scores = ranks.into_iter().map(|r| r as f64 * 0.37 - 4.0).collect();
            (labels, scores, perm)
        })
}

fn permute<T: Copy>(values: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| values[i]).collect()
}

proptest! {
    #[test]
    fn row_order_does_not_change_metrics((y, s, perm) in screen_strategy()) {
        let py = permute(&y, &perm);
        let ps = permute(&s, &perm);

        prop_assert!((auc(&y, &s) - auc(&py, &ps)).abs() < 1e-12);
        prop_assert!((average_precision(&y, &s).unwrap() - average_precision(&py, &ps).unwrap()).abs() < 1e-12);
        prop_assert!((rie(&y, &s, 1.0).unwrap() - rie(&py, &ps, 1.0).unwrap()).abs() < 1e-12);
        prop_assert!((bedroc(&y, &s, 1.0).unwrap() - bedroc(&py, &ps, 1.0).unwrap()).abs() < 1e-12);
        prop_assert!(
            (enrichment_factor(&y, &s, 0.2).unwrap() - enrichment_factor(&py, &ps, 0.2).unwrap()).abs() < 1e-12
        );
        let params = LogAucParams::descending();
        prop_assert!(
            (roc_log_auc(&y, &s, params).unwrap() - roc_log_auc(&py, &ps, params).unwrap()).abs() < 1e-12
        );
    }

    #[test]
    fn log_auc_ignores_monotonic_rescaling((y, s, _perm) in screen_strategy()) {
        let params = LogAucParams::descending();
        let base = roc_log_auc(&y, &s, params).unwrap();

        let affine: Vec<f64> = s.iter().map(|v| 3.0 * v + 7.0).collect();
        let exponential: Vec<f64> = s.iter().map(|v| (v / 4.0).exp()).collect();

        prop_assert!((base - roc_log_auc(&y, &affine, params).unwrap()).abs() < 1e-12);
        prop_assert!((base - roc_log_auc(&y, &exponential, params).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn ascending_orientation_mirrors_negated_scores((y, s, _perm) in screen_strategy()) {
        let negated: Vec<f64> = s.iter().map(|v| -v).collect();
        let desc = roc_log_auc(&y, &s, LogAucParams::descending()).unwrap();
        let asc = roc_log_auc(&y, &negated, LogAucParams::default()).unwrap();
        prop_assert!((desc - asc).abs() < 1e-12);
    }

    #[test]
    fn early_recognition_bounds((y, s, _perm) in screen_strategy()) {
        prop_assert!(enrichment_factor(&y, &s, 0.1).unwrap() >= 0.0);
        prop_assert!((enrichment_factor(&y, &s, 1.0).unwrap() - 1.0).abs() < 1e-12);

        let b = bedroc(&y, &s, 1.0).unwrap();
        prop_assert!(b > -1e-6 && b < 1.0 + 1e-6, "BEDROC mimo [0, 1]: {}", b);

        let a = auc(&y, &s);
        prop_assert!((0.0..=1.0).contains(&a));
    }

    #[test]
    fn rie_tends_to_one_for_small_alpha((y, s, _perm) in screen_strategy()) {
        let value = rie(&y, &s, 1e-6).unwrap();
        prop_assert!((value - 1.0).abs() < 1e-4, "RIE(α→0) = {}", value);
    }
}

#[test]
fn random_ranking_is_uninformative() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 20_000;
    let y: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.1)).collect();
    let s: Vec<f64> = (0..n).map(|_| rng.gen::<f64>()).collect();

    assert_abs_diff_eq!(auc(&y, &s), 0.5, epsilon = 0.05);
    assert_abs_diff_eq!(rie(&y, &s, 1.0).unwrap(), 1.0, epsilon = 0.05);
    assert_abs_diff_eq!(enrichment_factor(&y, &s, 1.0).unwrap(), 1.0, epsilon = 1e-12);
}
