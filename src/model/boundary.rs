//! Required speed as a function of time separation for a fixed distance.
//!
//! Used for the "causal boundary" chart: the curve `d / t` crosses the speed of
//! light exactly at the critical time separation `d / c`.

use ndarray::Array1;
use rayon::prelude::*;

use super::error::{ModelError, ModelResult};
use super::evaluator::CausalityEvaluator;

/// Sampled required-speed curve.
#[derive(Debug, Clone)]
pub struct BoundaryCurve {
    /// Time separations, seconds, log-spaced and increasing.
    pub time_deltas: Array1<f64>,
    /// Required speed at each time separation, m/s.
    pub required_speeds: Array1<f64>,
    /// Causality flag at each time separation.
    pub causal: Vec<bool>,
    /// Time separation at which the required speed equals the speed of light.
    pub critical_time_delta: f64,
    /// Speed of light used for the comparison, m/s.
    pub speed_of_light: f64,
}

impl BoundaryCurve {
    /// Samples the curve for `distance` over `[t_min, t_max]`.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - Evaluator providing the speed of light
    /// * `distance` - Fixed spatial separation, metres
    /// * `t_min` - Smallest time separation, must be `> 0`
    /// * `t_max` - Largest time separation, must be `> t_min`
    /// * `samples` - Number of samples, at least 2
    pub fn sample(
        evaluator: &CausalityEvaluator,
        distance: f64,
        t_min: f64,
        t_max: f64,
        samples: usize,
    ) -> ModelResult<Self> {
        if !(t_min > 0.0 && t_max > t_min && t_max.is_finite()) || samples < 2 {
            return Err(ModelError::InvalidRange {
                t_min,
                t_max,
                samples,
            });
        }

        let time_deltas = Array1::logspace(10.0, t_min.log10(), t_max.log10(), samples);
        let results: Vec<_> = time_deltas
            .view()
            .into_par_iter()
            .map(|&t| evaluator.evaluate(distance, t))
            .collect();

        Ok(Self {
            required_speeds: results.iter().map(|r| r.required_speed).collect(),
            causal: results.iter().map(|r| r.is_causal).collect(),
            time_deltas,
            critical_time_delta: evaluator.critical_time_delta(distance),
            speed_of_light: evaluator.speed_of_light(),
        })
    }

    /// Sweep range centred on the critical time separation, two decades each way.
    ///
    /// Falls back to `[1e-3, 1e3]` seconds when the distance is zero.
    pub fn default_range(evaluator: &CausalityEvaluator, distance: f64) -> (f64, f64) {
        let critical = evaluator.critical_time_delta(distance);
        if critical > 0.0 && critical.is_finite() {
            (critical / 100.0, critical * 100.0)
        } else {
            (1.0e-3, 1.0e3)
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time_deltas.len()
    }

    /// `true` when the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.time_deltas.is_empty()
    }

    /// `(time, speed)` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.time_deltas
            .iter()
            .zip(self.required_speeds.iter())
            .map(|(&t, &v)| [t, v])
            .collect()
    }
}
