//! Text summary of a causality result, as shown in the results panel and the diagram caption.

use super::evaluator::{CausalityResult, Verdict};

/// Formatted metrics for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Causal or not.
    pub verdict: Verdict,
    /// Required speed, e.g. `2.00e8 m/s`.
    pub required_speed: String,
    /// Required speed relative to light, e.g. `0.67x`.
    pub speed_factor: String,
    /// Relative difference to light speed, e.g. `-33.3% vs speed of light`.
    pub delta_vs_light: String,
    /// Speed of light used, e.g. `3e8 m/s`.
    pub speed_of_light: String,
}

impl Report {
    /// Builds the report for `result` against `speed_of_light` (m/s).
    pub fn new(result: &CausalityResult, speed_of_light: f64) -> Self {
        Self {
            verdict: result.verdict(),
            required_speed: format_speed(result.required_speed),
            speed_factor: format_factor(result.speed_factor(speed_of_light)),
            delta_vs_light: format_delta(result.percent_vs_light(speed_of_light)),
            speed_of_light: format!("{:.0e} m/s", speed_of_light),
        }
    }

    /// One-line explanation of the verdict.
    pub fn explanation(&self) -> &'static str {
        match self.verdict {
            Verdict::Causal => "These events can be causally connected.",
            Verdict::NonCausal => "These events cannot be causally connected.",
        }
    }

    /// Multi-line caption for the diagram.
    pub fn caption(&self) -> String {
        format!(
            "Status: {}\nRequired speed: {}\nFactor vs light: {}",
            self.verdict, self.required_speed, self.speed_factor
        )
    }
}

/// Formats a speed in scientific notation with two decimals.
pub fn format_speed(speed: f64) -> String {
    if speed.is_infinite() {
        "inf m/s".to_owned()
    } else {
        format!("{:.2e} m/s", speed)
    }
}

fn format_factor(factor: f64) -> String {
    if factor.is_infinite() {
        "inf x".to_owned()
    } else {
        format!("{:.2}x", factor)
    }
}

fn format_delta(percent: f64) -> String {
    if percent.is_infinite() {
        "+inf% vs speed of light".to_owned()
    } else {
        format!("{:+.1}% vs speed of light", percent)
    }
}
