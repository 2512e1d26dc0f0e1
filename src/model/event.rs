//! Events and the separation between them.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_DESTINATION, DEFAULT_DISTANCE, DEFAULT_ORIGIN, DEFAULT_TIME_DELTA};
use super::error::{ModelError, ModelResult};

/// A labeled point in the diagram plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Display label.
    pub label: String,
    /// Position in diagram units.
    pub pos: Array1<f64>,
}

impl Event {
    /// Creates an event at `(x, y)`.
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            pos: Array1::from_vec(vec![x, y]),
        }
    }
}

/// The two events being compared: where information leaves and where it must arrive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPair {
    /// Event A, where the signal is emitted.
    pub origin: Event,
    /// Event B, where the signal must arrive.
    pub destination: Event,
}

impl Default for EventPair {
    fn default() -> Self {
        Self {
            origin: Event::new("Event A (origin)", DEFAULT_ORIGIN[0], DEFAULT_ORIGIN[1]),
            destination: Event::new(
                "Event B (destination)",
                DEFAULT_DESTINATION[0],
                DEFAULT_DESTINATION[1],
            ),
        }
    }
}

/// Spatial and temporal separation between two events, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationInput {
    distance: f64,
    time_delta: f64,
}

impl SeparationInput {
    /// Validates a separation.
    ///
    /// Rejects NaN/infinite values and negative distance or time. A zero time
    /// separation is accepted; the evaluator turns it into the infinite-speed
    /// sentinel.
    pub fn new(distance: f64, time_delta: f64) -> ModelResult<Self> {
        if !distance.is_finite() {
            return Err(ModelError::NonFinite { field: "distance" });
        }
        if !time_delta.is_finite() {
            return Err(ModelError::NonFinite {
                field: "time separation",
            });
        }
        if distance < 0.0 {
            return Err(ModelError::NegativeDistance(distance));
        }
        if time_delta < 0.0 {
            return Err(ModelError::NegativeTimeDelta(time_delta));
        }
        Ok(Self {
            distance,
            time_delta,
        })
    }

    /// Spatial separation in metres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Time separation in seconds.
    pub fn time_delta(&self) -> f64 {
        self.time_delta
    }
}

impl Default for SeparationInput {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            time_delta: DEFAULT_TIME_DELTA,
        }
    }
}
