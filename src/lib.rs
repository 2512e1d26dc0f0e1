//! # Lightcone - causal connection between two events
//!
//! Decides whether information could travel between two events separated by a
//! distance and a time interval without exceeding the speed of light, and
//! animates a light ray against the information ray that would be needed.
//!
//! ## Features
//!
//! - Causality check with a configurable speed of light (exact or rounded)
//! - Ray animation along a fixed two-point diagram
//! - Causal boundary sweep over time separations
//! - Formatted results and a recent-events log for the UI
//! - Real-time visualization with egui/macroquad
//!
//! ## Core Modules
//!
//! - [`model::evaluator`] - Required speed and verdict
//! - [`model::interpolator`] - Marker positions for one animation step
//! - [`model::animation`] - Looping progress clock
//! - [`model::params`] - Configuration

/// Causality model: pure evaluation plus the small amount of state the UI needs.
pub mod model {
    /// Looping progress clock owned by the frame loop.
    pub mod animation;
    /// Required speed sampled across time separations.
    pub mod boundary;
    /// Speed-of-light presets and defaults.
    pub mod constants;
    /// Error type.
    pub mod error;
    /// Causality evaluation.
    pub mod evaluator;
    /// Events and their separation.
    pub mod event;
    /// Recent events shown in the UI.
    pub mod event_log;
    /// Geometric utility functions for segments.
    pub mod geometric_utils;
    /// Light and information marker interpolation.
    pub mod interpolator;
    /// Configuration parameters.
    pub mod params;
    /// Formatted results.
    pub mod report;
}
