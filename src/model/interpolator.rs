//! Marker positions for the light and information rays.
//!
//! Both markers start at the origin event and move along the straight segment
//! towards the destination. The light marker covers the segment at unit rate;
//! the information marker moves `required_speed / c` times as fast and stops
//! at the destination.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::evaluator::CausalityResult;
use super::event::EventPair;
use super::geometric_utils::{point_along, point_segment_distance, unit_direction};

/// Marker positions for one animation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Position of the light marker.
    pub light_position: Array1<f64>,
    /// Position of the information marker.
    pub information_position: Array1<f64>,
    /// Progress the frame was computed for, in `[0, 1]`.
    pub progress: f64,
}

/// Computes [`AnimationFrame`]s. Holds only the speed of light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayInterpolator {
    speed_of_light: f64,
}

impl RayInterpolator {
    /// Creates an interpolator scaling information speed against `speed_of_light` (m/s).
    pub fn new(speed_of_light: f64) -> Self {
        Self { speed_of_light }
    }

    /// Marker positions at `progress`.
    ///
    /// # Arguments
    ///
    /// * `origin` - Start of the segment
    /// * `destination` - End of the segment
    /// * `result` - Causality result providing the required speed
    /// * `progress` - Animation progress, clamped to `[0, 1]`
    ///
    /// # Returns
    ///
    /// The light marker at fraction `progress` of the segment and the
    /// information marker at fraction `progress * required_speed / c`, never
    /// past the destination. Coincident endpoints pin both markers to that point.
    pub fn advance(
        &self,
        origin: &Array1<f64>,
        destination: &Array1<f64>,
        result: &CausalityResult,
        progress: f64,
    ) -> AnimationFrame {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let Some((unit, total_distance)) = unit_direction(origin, destination) else {
            log::debug!("origin and destination coincide, pinning both markers");
            return AnimationFrame {
                light_position: origin.clone(),
                information_position: origin.clone(),
                progress,
            };
        };

        let light_travelled = (progress * total_distance).min(total_distance);

        // progress == 0 must stay at the origin even for an infinite factor (0 * inf is NaN)
        let information_fraction = if progress == 0.0 {
            0.0
        } else {
            // max/min rather than clamp: a NaN factor collapses to the origin
            (progress * result.speed_factor(self.speed_of_light))
                .max(0.0)
                .min(1.0)
        };
        let information_travelled = (information_fraction * total_distance).min(total_distance);

        let position_at = |travelled: f64| {
            if travelled >= total_distance {
                destination.clone()
            } else {
                point_along(origin, &unit, travelled)
            }
        };

        let frame = AnimationFrame {
            light_position: position_at(light_travelled),
            information_position: position_at(information_travelled),
            progress,
        };
        debug_assert!(
            point_segment_distance(&frame.information_position, origin, destination)
                <= total_distance * 1e-9,
            "information marker left the segment"
        );
        frame
    }

    /// [`Self::advance`] for an [`EventPair`].
    pub fn advance_pair(
        &self,
        events: &EventPair,
        result: &CausalityResult,
        progress: f64,
    ) -> AnimationFrame {
        self.advance(&events.origin.pos, &events.destination.pos, result, progress)
    }
}
