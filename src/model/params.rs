use serde::{Deserialize, Serialize};

use super::animation::AnimationClock;
use super::constants::{
    DEFAULT_BOUNDARY_SAMPLES, DEFAULT_DISTANCE, DEFAULT_EVENT_LOG_CAPACITY, DEFAULT_PROGRESS_STEP,
    DEFAULT_TIME_DELTA, SpeedOfLightPreset,
};
use super::error::{ModelError, ModelResult};
use super::evaluator::CausalityEvaluator;
use super::event::{EventPair, SeparationInput};
use super::interpolator::RayInterpolator;

/// Parameters that control evaluation and display.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Speed-of-light preset.
    pub speed_of_light_preset: SpeedOfLightPreset,
    /// Explicit speed of light in m/s, overriding the preset.
    pub custom_speed_of_light: Option<f64>,
    /// The two events drawn in the diagram.
    pub events: EventPair,
    /// Initial spatial separation, metres.
    pub distance: f64,
    /// Initial time separation, seconds.
    pub time_delta: f64,
    /// Animation progress added per frame.
    pub progress_step: f64,
    /// Start the animation running.
    pub auto_play: bool,
    /// Samples in the causal boundary chart.
    pub boundary_samples: usize,
    /// Entries kept in the event log.
    pub event_log_capacity: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            speed_of_light_preset: SpeedOfLightPreset::Exact,
            custom_speed_of_light: None,
            events: EventPair::default(),
            distance: DEFAULT_DISTANCE,
            time_delta: DEFAULT_TIME_DELTA,
            progress_step: DEFAULT_PROGRESS_STEP,
            auto_play: false,
            boundary_samples: DEFAULT_BOUNDARY_SAMPLES,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl Params {
    /// Params using the given preset, everything else default.
    pub fn with_preset(preset: SpeedOfLightPreset) -> Self {
        Self {
            speed_of_light_preset: preset,
            ..Self::default()
        }
    }

    /// Effective speed of light, m/s.
    pub fn speed_of_light(&self) -> f64 {
        self.custom_speed_of_light
            .unwrap_or_else(|| self.speed_of_light_preset.value())
    }

    /// Evaluator for the effective speed of light.
    pub fn evaluator(&self) -> CausalityEvaluator {
        CausalityEvaluator::new(self.speed_of_light())
    }

    /// Interpolator for the effective speed of light.
    pub fn interpolator(&self) -> RayInterpolator {
        RayInterpolator::new(self.speed_of_light())
    }

    /// Paused clock using the configured progress step.
    pub fn clock(&self) -> ModelResult<AnimationClock> {
        AnimationClock::new(self.progress_step)
    }

    /// Initial separation, validated.
    pub fn separation(&self) -> ModelResult<SeparationInput> {
        SeparationInput::new(self.distance, self.time_delta)
    }

    /// Checks values that would make evaluation meaningless.
    pub fn validate(&self) -> ModelResult<()> {
        let c = self.speed_of_light();
        if !(c.is_finite() && c > 0.0) {
            return Err(ModelError::InvalidSpeedOfLight(c));
        }
        self.clock()?;
        self.separation()?;
        Ok(())
    }

    /// Loads and validates params from a JSON file.
    pub fn load_from_file(path: &str) -> ModelResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        log::info!(
            "loaded config from {} (c = {} m/s)",
            path,
            params.speed_of_light()
        );
        Ok(params)
    }
}
