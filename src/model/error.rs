//! Error type for input validation, configuration and sweeps.

/// Errors reported by the model layer.
///
/// Division by zero and coincident endpoints are not errors: the evaluator
/// and interpolator return well-defined values for them.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Spatial separation below zero.
    #[error("distance must be non-negative, got {0} m")]
    NegativeDistance(f64),
    /// Time separation below zero.
    #[error("time separation must be non-negative, got {0} s")]
    NegativeTimeDelta(f64),
    /// NaN or infinite input.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending input.
        field: &'static str,
    },
    /// Speed of light that is not a positive finite number.
    #[error("speed of light must be positive and finite, got {0} m/s")]
    InvalidSpeedOfLight(f64),
    /// Progress step outside `(0, 1]`.
    #[error("progress step must be in (0, 1], got {0}")]
    InvalidProgressStep(f64),
    /// Arguments of a boundary sweep that describe no usable range.
    #[error("invalid sweep range [{t_min}, {t_max}] with {samples} samples")]
    InvalidRange {
        /// Lower time bound, seconds.
        t_min: f64,
        /// Upper time bound, seconds.
        t_max: f64,
        /// Requested sample count.
        samples: usize,
    },
    /// Config file could not be read.
    #[error("config io: {0}")]
    ConfigIo(#[from] std::io::Error),
    /// Config file is not valid JSON for [`super::params::Params`].
    #[error("config json: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
