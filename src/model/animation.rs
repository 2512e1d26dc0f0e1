//! Looping progress clock driving the ray animation.
//!
//! The interpolator is stateless; whoever renders frames owns one of these
//! and ticks it once per frame.

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_PROGRESS_STEP;
use super::error::{ModelError, ModelResult};

/// Playback state of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playback {
    /// Progress advances on every tick.
    Running,
    /// Progress only changes through [`AnimationClock::scrub`].
    Paused,
}

/// Progress in `[0, 1)` that advances by a fixed step and wraps to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClock {
    progress: f64,
    step: f64,
    playback: Playback,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self {
            progress: 0.0,
            step: DEFAULT_PROGRESS_STEP,
            playback: Playback::Paused,
        }
    }
}

impl AnimationClock {
    /// Creates a paused clock at zero progress.
    ///
    /// `step` must lie in `(0, 1]`; anything else could leave `[0, 1)` or never wrap.
    pub fn new(step: f64) -> ModelResult<Self> {
        if !(step > 0.0 && step <= 1.0) {
            return Err(ModelError::InvalidProgressStep(step));
        }
        Ok(Self {
            step,
            ..Self::default()
        })
    }

    /// Current progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Increment applied per tick.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Current playback state.
    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// `true` while auto-advancing.
    pub fn is_running(&self) -> bool {
        self.playback == Playback::Running
    }

    /// Advances one step when running. Reaching or passing 1.0 wraps to 0.0.
    ///
    /// # Returns
    ///
    /// `true` if the tick wrapped around.
    pub fn tick(&mut self) -> bool {
        if self.playback == Playback::Paused {
            return false;
        }
        self.progress += self.step;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            return true;
        }
        false
    }

    /// Pauses and jumps to `progress`, clamped to `[0, 1]`.
    pub fn scrub(&mut self, progress: f64) {
        self.playback = Playback::Paused;
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Starts auto-advancing.
    pub fn resume(&mut self) {
        self.playback = Playback::Running;
    }

    /// Stops auto-advancing, keeping the current progress.
    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Switches between running and paused.
    pub fn toggle(&mut self) {
        self.playback = match self.playback {
            Playback::Running => Playback::Paused,
            Playback::Paused => Playback::Running,
        };
    }

    /// Returns to zero progress without changing playback.
    pub fn reset(&mut self) {
        self.progress = 0.0;
    }
}
