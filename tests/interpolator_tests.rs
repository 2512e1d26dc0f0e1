#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use lightcone::model::constants::{SPEED_OF_LIGHT_EXACT, SPEED_OF_LIGHT_ROUNDED, SpeedOfLightPreset};
use lightcone::model::evaluator::{CausalityEvaluator, CausalityResult};
use lightcone::model::event::EventPair;
use lightcone::model::geometric_utils::{point_segment_distance, segment_length};
use lightcone::model::interpolator::RayInterpolator;
use ndarray::Array1;

const TOLERANCE: f64 = 1e-9;

fn point(x: f64, y: f64) -> Array1<f64> {
    Array1::from_vec(vec![x, y])
}

fn assert_close(actual: &Array1<f64>, expected: &Array1<f64>) {
    assert!(
        segment_length(actual, expected) < TOLERANCE,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn result_with_speed(speed_of_light: f64, factor: f64) -> CausalityResult {
    CausalityEvaluator::new(speed_of_light).evaluate(speed_of_light * factor, 1.0)
}

#[test]
fn test_progress_zero_starts_at_origin() {
    let events = EventPair::default();
    for preset in SpeedOfLightPreset::ALL {
        let interpolator = RayInterpolator::new(preset.value());
        for factor in [0.0, 0.5, 1.0, 3.0] {
            let frame =
                interpolator.advance_pair(&events, &result_with_speed(preset.value(), factor), 0.0);
            assert_close(&frame.light_position, &events.origin.pos);
            assert_close(&frame.information_position, &events.origin.pos);
            assert_eq!(frame.progress, 0.0);
        }
    }
}

#[test]
fn test_infinite_speed_at_progress_zero_stays_at_origin() {
    let events = EventPair::default();
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);
    let frame = interpolator.advance_pair(&events, &CausalityResult::INSTANTANEOUS, 0.0);

    assert_close(&frame.information_position, &events.origin.pos);
}

#[test]
fn test_infinite_speed_snaps_to_destination() {
    let events = EventPair::default();
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);
    let frame = interpolator.advance_pair(&events, &CausalityResult::INSTANTANEOUS, 0.02);

    assert_close(&frame.information_position, &events.destination.pos);
    assert!(segment_length(&frame.light_position, &events.origin.pos) > 0.0);
}

#[test]
fn test_causal_full_progress() {
    let events = EventPair::default();
    let total = segment_length(&events.origin.pos, &events.destination.pos);

    for preset in SpeedOfLightPreset::ALL {
        let interpolator = RayInterpolator::new(preset.value());
        // distance = 1e9, time = 5 -> 2e8 m/s
        let result = CausalityEvaluator::new(preset.value()).evaluate(1.0e9, 5.0);
        assert!(result.is_causal);

        let frame = interpolator.advance_pair(&events, &result, 1.0);
        let travelled = segment_length(&events.origin.pos, &frame.information_position);

        assert_close(&frame.light_position, &events.destination.pos);
        assert!((travelled - total * 2.0e8 / preset.value()).abs() < TOLERANCE);
        assert!(travelled <= total);
    }
}

#[test]
fn test_non_causal_is_clamped_at_destination() {
    let events = EventPair::default();
    for preset in SpeedOfLightPreset::ALL {
        let interpolator = RayInterpolator::new(preset.value());
        let result = result_with_speed(preset.value(), 3.0);
        assert!(!result.is_causal);

        let frame = interpolator.advance_pair(&events, &result, 1.0);
        assert_eq!(frame.information_position, events.destination.pos);

        // already arrived at a third of the way for light
        let early = interpolator.advance_pair(&events, &result, 0.5);
        assert_eq!(early.information_position, events.destination.pos);
    }
}

#[test]
fn test_information_runs_ahead_proportionally() {
    let origin = point(0.0, 0.0);
    let destination = point(10.0, 0.0);
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_ROUNDED);
    let result = result_with_speed(SPEED_OF_LIGHT_ROUNDED, 2.0);

    let frame = interpolator.advance(&origin, &destination, &result, 0.25);

    assert_close(&frame.light_position, &point(2.5, 0.0));
    assert_close(&frame.information_position, &point(5.0, 0.0));
}

#[test]
fn test_markers_stay_on_segment() {
    let events = EventPair::default();
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);
    let result = result_with_speed(SPEED_OF_LIGHT_EXACT, 0.7);

    for step in 0..=50_i32 {
        let progress = f64::from(step) / 50.0;
        let frame = interpolator.advance_pair(&events, &result, progress);
        for marker in [&frame.light_position, &frame.information_position] {
            let offset = point_segment_distance(marker, &events.origin.pos, &events.destination.pos);
            assert!(offset < TOLERANCE);
        }
    }
}

#[test]
fn test_progress_is_clamped() {
    let events = EventPair::default();
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);
    let result = result_with_speed(SPEED_OF_LIGHT_EXACT, 0.5);

    let over = interpolator.advance_pair(&events, &result, 1.7);
    assert_eq!(over.progress, 1.0);
    assert_close(&over.light_position, &events.destination.pos);

    let under = interpolator.advance_pair(&events, &result, -0.3);
    assert_eq!(under.progress, 0.0);
    assert_close(&under.light_position, &events.origin.pos);
}

#[test]
fn test_degenerate_geometry_pins_markers() {
    let shared = point(4.0, 4.0);
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);

    for result in [
        result_with_speed(SPEED_OF_LIGHT_EXACT, 0.5),
        result_with_speed(SPEED_OF_LIGHT_EXACT, 4.0),
        CausalityResult::INSTANTANEOUS,
    ] {
        for progress in [0.0, 0.5, 1.0] {
            let frame = interpolator.advance(&shared, &shared, &result, progress);
            assert_eq!(frame.light_position, shared);
            assert_eq!(frame.information_position, shared);
        }
    }
}

#[test]
fn test_markers_stay_on_long_diagonal_segment() {
    let origin = point(-3.0e6, 1.0e6);
    let destination = point(7.0e6, -2.5e6);
    let interpolator = RayInterpolator::new(SPEED_OF_LIGHT_EXACT);

    for factor in [0.1, 0.9, 1.0, 5.0] {
        let result = result_with_speed(SPEED_OF_LIGHT_EXACT, factor);
        for step in 0..=20_i32 {
            let frame = interpolator.advance(&origin, &destination, &result, f64::from(step) / 20.0);
            let offset = point_segment_distance(&frame.information_position, &origin, &destination);
            assert!(offset <= 1e-6);
        }
    }
}
