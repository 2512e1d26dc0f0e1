//! Physical constants, presets and default values shared by the model and the UI.

/// Speed of light in vacuum, m/s (exact SI value).
pub const SPEED_OF_LIGHT_EXACT: f64 = 299_792_458.0;

/// Speed of light rounded to 3×10⁸ m/s.
pub const SPEED_OF_LIGHT_ROUNDED: f64 = 3.0e8;

/// Progress added to the animation clock on every tick.
pub const DEFAULT_PROGRESS_STEP: f64 = 0.02;

/// Diagram position of event A (origin).
pub const DEFAULT_ORIGIN: [f64; 2] = [1.0, 3.0];

/// Diagram position of event B (destination).
pub const DEFAULT_DESTINATION: [f64; 2] = [9.0, 6.0];

/// Visible diagram area: `[x_min, x_max, y_min, y_max]`.
pub const DIAGRAM_BOUNDS: [f64; 4] = [-0.5, 10.5, 1.5, 7.5];

/// Initial spatial separation, metres.
pub const DEFAULT_DISTANCE: f64 = 1.0e9;

/// Initial time separation, seconds.
pub const DEFAULT_TIME_DELTA: f64 = 5.0;

/// Smallest distance the input panel accepts, metres.
pub const MIN_DISTANCE_INPUT: f64 = 1.0;

/// Smallest time separation the input panel accepts, seconds.
pub const MIN_TIME_DELTA_INPUT: f64 = 0.001;

/// Drag increment for the distance field, metres.
pub const DISTANCE_INPUT_STEP: f64 = 1.0e6;

/// Drag increment for the time field, seconds.
pub const TIME_DELTA_INPUT_STEP: f64 = 0.1;

/// Number of samples in the causal boundary chart.
pub const DEFAULT_BOUNDARY_SAMPLES: usize = 120;

/// Maximum number of entries kept in the event log.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 20;

/// Selectable speed-of-light presets.
///
/// Both values appear in practice; the comparison is only as exact as the
/// constant it is made against, so the choice is left to configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SpeedOfLightPreset {
    /// 299 792 458 m/s.
    Exact,
    /// 3×10⁸ m/s.
    Rounded,
}

impl SpeedOfLightPreset {
    /// All presets, in display order.
    pub const ALL: [Self; 2] = [Self::Exact, Self::Rounded];

    /// Value of the preset in m/s.
    pub fn value(self) -> f64 {
        match self {
            Self::Exact => SPEED_OF_LIGHT_EXACT,
            Self::Rounded => SPEED_OF_LIGHT_ROUNDED,
        }
    }

    /// Short label for selection widgets.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "c = 299 792 458 m/s",
            Self::Rounded => "c ≈ 3×10⁸ m/s",
        }
    }
}
