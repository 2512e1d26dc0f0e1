//! Causality test between two events.
//!
//! Two events can be causally connected when a signal covering their spatial
//! separation within their time separation does not need to travel faster
//! than light.

use serde::{Deserialize, Serialize};

use super::event::SeparationInput;

/// Outcome of a causality check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CausalityResult {
    /// `true` when `required_speed` does not exceed the speed of light.
    pub is_causal: bool,
    /// Speed a signal needs to connect the events, m/s. `+inf` for zero time separation.
    pub required_speed: f64,
}

/// Two-way classification of a [`CausalityResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Information can travel between the events.
    Causal,
    /// Information would have to outrun light.
    NonCausal,
}

impl Verdict {
    /// Upper-case status label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Causal => "CAUSAL",
            Self::NonCausal => "NON-CAUSAL",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl CausalityResult {
    /// Sentinel for simultaneous events.
    pub const INSTANTANEOUS: Self = Self {
        is_causal: false,
        required_speed: f64::INFINITY,
    };

    /// Required speed as a multiple of `speed_of_light`.
    pub fn speed_factor(&self, speed_of_light: f64) -> f64 {
        self.required_speed / speed_of_light
    }

    /// Relative excess over the speed of light in percent (negative when slower).
    pub fn percent_vs_light(&self, speed_of_light: f64) -> f64 {
        (self.speed_factor(speed_of_light) - 1.0) * 100.0
    }

    /// Verdict of this result.
    pub fn verdict(&self) -> Verdict {
        if self.is_causal {
            Verdict::Causal
        } else {
            Verdict::NonCausal
        }
    }
}

/// Compares required signal speeds against a configured speed of light.
///
/// Stateless apart from the constant; safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CausalityEvaluator {
    speed_of_light: f64,
}

impl CausalityEvaluator {
    /// Creates an evaluator for the given speed of light (m/s).
    pub fn new(speed_of_light: f64) -> Self {
        Self { speed_of_light }
    }

    /// Speed of light this evaluator compares against, m/s.
    pub fn speed_of_light(&self) -> f64 {
        self.speed_of_light
    }

    /// Evaluates a raw distance/time pair.
    ///
    /// # Arguments
    ///
    /// * `distance` - Spatial separation in metres, expected `>= 0`
    /// * `time_delta` - Time separation in seconds
    ///
    /// # Returns
    ///
    /// The required speed and whether it stays at or below light speed. A zero
    /// `time_delta` yields [`CausalityResult::INSTANTANEOUS`], including when
    /// `distance` is also zero.
    pub fn evaluate(&self, distance: f64, time_delta: f64) -> CausalityResult {
        if time_delta == 0.0 {
            if distance == 0.0 {
                log::debug!("coincident events (zero distance, zero time), reporting infinite speed");
            }
            return CausalityResult::INSTANTANEOUS;
        }

        let required_speed = distance / time_delta;
        CausalityResult {
            is_causal: required_speed <= self.speed_of_light,
            required_speed,
        }
    }

    /// Evaluates a validated separation.
    pub fn evaluate_input(&self, input: &SeparationInput) -> CausalityResult {
        self.evaluate(input.distance(), input.time_delta())
    }

    /// Smallest time separation, in seconds, for which `distance` is causal.
    pub fn critical_time_delta(&self, distance: f64) -> f64 {
        distance / self.speed_of_light
    }
}
