#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use lightcone::model::boundary::BoundaryCurve;
use lightcone::model::constants::{SPEED_OF_LIGHT_ROUNDED, SpeedOfLightPreset};
use lightcone::model::error::ModelError;
use lightcone::model::evaluator::CausalityEvaluator;

#[test]
fn test_curve_is_monotonic_and_split_at_critical_time() {
    for preset in SpeedOfLightPreset::ALL {
        let evaluator = CausalityEvaluator::new(preset.value());
        let distance = 1.0e9;
        let (t_min, t_max) = BoundaryCurve::default_range(&evaluator, distance);
        let curve = BoundaryCurve::sample(&evaluator, distance, t_min, t_max, 64)
            .expect("valid range");

        assert_eq!(curve.len(), 64);
        assert_eq!(curve.causal.len(), 64);
        assert_eq!(curve.speed_of_light, preset.value());

        for pair in curve.required_speeds.as_slice().expect("contiguous").windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        for pair in curve.time_deltas.as_slice().expect("contiguous").windows(2) {
            assert!(pair[1] > pair[0]);
        }

        for (&t, &causal) in curve.time_deltas.iter().zip(curve.causal.iter()) {
            if t > curve.critical_time_delta * 1.0001 {
                assert!(causal);
            } else if t < curve.critical_time_delta * 0.9999 {
                assert!(!causal);
            }
        }
    }
}

#[test]
fn test_sample_endpoints() {
    let evaluator = CausalityEvaluator::new(SPEED_OF_LIGHT_ROUNDED);
    let curve = BoundaryCurve::sample(&evaluator, 3.0e8, 0.01, 100.0, 5).expect("valid range");

    assert!((curve.time_deltas[0] - 0.01).abs() < 1e-12);
    assert!((curve.time_deltas[4] - 100.0).abs() < 1e-9);
    assert!((curve.time_deltas[2] - 1.0).abs() < 1e-12);
    assert_eq!(curve.critical_time_delta, 1.0);
    assert_eq!(curve.points().len(), 5);
}

#[test]
fn test_default_range_for_zero_distance() {
    let evaluator = CausalityEvaluator::new(SPEED_OF_LIGHT_ROUNDED);
    let (t_min, t_max) = BoundaryCurve::default_range(&evaluator, 0.0);

    assert_eq!((t_min, t_max), (1.0e-3, 1.0e3));
    let curve = BoundaryCurve::sample(&evaluator, 0.0, t_min, t_max, 10).expect("valid range");
    assert!(curve.causal.iter().all(|&causal| causal));
}

#[test]
fn test_invalid_ranges_are_rejected() {
    let evaluator = CausalityEvaluator::new(SPEED_OF_LIGHT_ROUNDED);

    for (t_min, t_max, samples) in [(0.0, 1.0, 10), (2.0, 1.0, 10), (1.0, 2.0, 1), (-1.0, 1.0, 10)] {
        let err = BoundaryCurve::sample(&evaluator, 1.0, t_min, t_max, samples).unwrap_err();
        assert!(matches!(err, ModelError::InvalidRange { .. }));
    }
}

#[test]
fn test_every_sample_is_evaluated_in_order() {
    let evaluator = CausalityEvaluator::new(SPEED_OF_LIGHT_ROUNDED);
    let distance = 6.0e8;
    let curve = BoundaryCurve::sample(&evaluator, distance, 0.1, 20.0, 257).expect("valid range");

    assert_eq!(curve.required_speeds.len(), curve.time_deltas.len());
    assert_eq!(curve.causal.len(), curve.time_deltas.len());

    for (i, &t) in curve.time_deltas.iter().enumerate() {
        let expected = evaluator.evaluate(distance, t);
        assert_eq!(curve.required_speeds[i], expected.required_speed);
        assert_eq!(curve.causal[i], expected.is_causal);
    }
}
