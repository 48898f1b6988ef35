//! Classifier properties: score shape, determinism, monotonicity, degenerate
//! parameters, tie-breaking, and a hand-computed reference.

use saa_screener::{
    classifier::{gaussian_pdf, GaussianNb, DENSITY_FLOOR},
    error::ShapeError,
    model::{ClassLabel, ClassParams, ModelParams},
    survey::ITEM_COUNT,
};

fn params_3x1(
    alto: (f64, f64, f64),
    normal: (f64, f64, f64),
    bajo: (f64, f64, f64),
) -> ModelParams {
    let class = |label, (prior, mean, stdev): (f64, f64, f64)| ClassParams {
        label,
        prior,
        mean: vec![mean],
        stdev: vec![stdev],
    };
    ModelParams {
        classes: vec![
            class(ClassLabel::Alto, alto),
            class(ClassLabel::Normal, normal),
            class(ClassLabel::Bajo, bajo),
        ],
    }
}

fn builtin_classifier() -> GaussianNb {
    GaussianNb::new(ModelParams::builtin()).unwrap()
}

#[test]
fn three_scores_one_prediction() {
    let nb = builtin_classifier();
    let result = nb.classify(&[2u8; ITEM_COUNT]).unwrap();
    assert_eq!(result.scores.len(), 3);
    let labels: Vec<ClassLabel> = result.scores.iter().map(|s| s.label).collect();
    assert_eq!(labels, ClassLabel::ALL.to_vec());
    assert!(ClassLabel::ALL.contains(&result.predicted));
}

#[test]
fn determinism_bitwise() {
    let nb = builtin_classifier();
    let answers = [5u8, 0, 3, 1, 4, 2, 5, 0, 3, 1, 4, 2, 5, 0, 3, 1, 4, 2, 5, 0, 3, 1, 4, 2, 5, 0, 3, 1, 4, 2];
    let a = nb.classify(&answers).unwrap();
    let b = nb.classify(&answers).unwrap();
    assert_eq!(a.predicted, b.predicted);
    for (x, y) in a.scores.iter().zip(b.scores.iter()) {
        assert_eq!(x.log_posterior.to_bits(), y.log_posterior.to_bits());
    }
}

#[test]
fn moving_toward_class_mean_does_not_lower_its_score() {
    // Item 0 for Alto: mean 3.283, stdev 0.7366. Distances for 0, 2, 3 are
    // strictly decreasing, so the Alto score must be nondecreasing.
    let nb = builtin_classifier();
    let mut answers = [2u8; ITEM_COUNT];
    let mut scores = Vec::new();
    for v in [0u8, 2, 3] {
        answers[0] = v;
        let result = nb.classify(&answers).unwrap();
        scores.push(result.score(ClassLabel::Alto).unwrap());
    }
    assert!(scores[0] <= scores[1]);
    assert!(scores[1] <= scores[2]);
}

#[test]
fn zero_variance_item_is_exact_match_or_floor() {
    let params = params_3x1((0.5, 2.0, 0.0), (0.5, 2.0, 1.0), (0.5, 0.0, 1.0));
    let nb = GaussianNb::new(params).unwrap();

    // Exact mean match contributes density 1.0, i.e. nothing beyond the prior.
    let on_mean = nb.classify(&[2]).unwrap();
    assert_eq!(on_mean.score(ClassLabel::Alto).unwrap(), 0.5f64.ln());

    // Any other value contributes ln(floor).
    let off_mean = nb.classify(&[3]).unwrap();
    assert_eq!(
        off_mean.score(ClassLabel::Alto).unwrap(),
        0.5f64.ln() + DENSITY_FLOOR.ln()
    );
}

#[test]
fn vanishing_prior_makes_class_unselectable() {
    // Alto matches the answer exactly but its prior is negligible; Normal is
    // a poor feature match with a healthy prior and must still win.
    let params = params_3x1((1e-300, 3.0, 1.0), (0.9, 0.0, 1.0), (0.05, 0.0, 1.0));
    let nb = GaussianNb::new(params).unwrap();
    let result = nb.classify(&[3]).unwrap();
    assert_eq!(result.predicted, ClassLabel::Normal);
    assert!(result.score(ClassLabel::Alto).unwrap() < result.score(ClassLabel::Normal).unwrap());
}

#[test]
fn exact_tie_resolves_to_first_class_in_order() {
    // Alto and Normal carry identical statistics, so their scores are
    // bit-identical; the first class in enumeration order wins.
    let params = params_3x1((0.4, 1.0, 1.0), (0.4, 1.0, 1.0), (0.2, 9.0, 1.0));
    let nb = GaussianNb::new(params).unwrap();
    let result = nb.classify(&[1]).unwrap();
    assert_eq!(
        result.score(ClassLabel::Alto).unwrap().to_bits(),
        result.score(ClassLabel::Normal).unwrap().to_bits()
    );
    assert_eq!(result.predicted, ClassLabel::Alto);
}

#[test]
fn all_fives_classifies_high() {
    let nb = builtin_classifier();
    let result = nb.classify(&[5u8; ITEM_COUNT]).unwrap();
    assert_eq!(result.predicted, ClassLabel::Alto);
}

#[test]
fn all_zeros_classifies_low() {
    let nb = builtin_classifier();
    let result = nb.classify(&[0u8; ITEM_COUNT]).unwrap();
    assert_eq!(result.predicted, ClassLabel::Bajo);
}

#[test]
fn all_threes_classifies_high_on_builtin_table() {
    // The Alto means cluster around 3; mid-scale answers sit closest to them
    // in aggregate log-density.
    let nb = builtin_classifier();
    let result = nb.classify(&[3u8; ITEM_COUNT]).unwrap();
    assert_eq!(result.predicted, ClassLabel::Alto);
}

#[test]
fn two_feature_reference_scores() {
    let class = |label, prior, mean: Vec<f64>, stdev: Vec<f64>| ClassParams {
        label,
        prior,
        mean,
        stdev,
    };
    let params = ModelParams {
        classes: vec![
            class(ClassLabel::Alto, 0.33, vec![3.0, 3.5], vec![0.7, 0.5]),
            class(ClassLabel::Normal, 0.33, vec![1.5, 1.5], vec![0.9, 1.0]),
            class(ClassLabel::Bajo, 0.33, vec![0.3, 0.4], vec![0.4, 0.6]),
        ],
    };
    let nb = GaussianNb::new(params).unwrap();
    let result = nb.classify(&[3, 3]).unwrap();

    // Independent accumulation of the same model, per class.
    let reference = |prior: f64, mean: [f64; 2], stdev: [f64; 2]| {
        let mut logp = prior.ln();
        for i in 0..2 {
            let p = gaussian_pdf(3.0, mean[i], stdev[i]);
            logp += if p > 0.0 { p.ln() } else { DENSITY_FLOOR.ln() };
        }
        logp
    };
    let expected_alto = reference(0.33, [3.0, 3.5], [0.7, 0.5]);
    let expected_normal = reference(0.33, [1.5, 1.5], [0.9, 1.0]);
    let expected_bajo = reference(0.33, [0.3, 0.4], [0.4, 0.6]);

    assert!((result.score(ClassLabel::Alto).unwrap() - expected_alto).abs() < 1e-12);
    assert!((result.score(ClassLabel::Normal).unwrap() - expected_normal).abs() < 1e-12);
    assert!((result.score(ClassLabel::Bajo).unwrap() - expected_bajo).abs() < 1e-12);
    assert_eq!(result.predicted, ClassLabel::Alto);
}

#[test]
fn wrong_length_is_rejected_without_partial_result() {
    let nb = builtin_classifier();
    let short = nb.classify(&[3u8; ITEM_COUNT - 1]);
    assert_eq!(
        short.unwrap_err(),
        ShapeError {
            expected: ITEM_COUNT,
            actual: ITEM_COUNT - 1
        }
    );
    let long = nb.classify(&[3u8; ITEM_COUNT + 1]);
    assert_eq!(
        long.unwrap_err(),
        ShapeError {
            expected: ITEM_COUNT,
            actual: ITEM_COUNT + 1
        }
    );
}

#[test]
fn out_of_scale_values_still_score_finitely() {
    // The surface enforces Likert bounds; the classifier does not. A wildly
    // out-of-range value underflows every density to the floor and stays
    // finite rather than producing -inf.
    let nb = builtin_classifier();
    let result = nb.classify(&[255u8; ITEM_COUNT]).unwrap();
    for s in &result.scores {
        assert!(s.log_posterior.is_finite());
    }
}
