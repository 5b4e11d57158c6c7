//! Page interaction tuning.
//!
//! # Responsibility
//! - Hold the pixel thresholds used by section tracking and the nav bar.
//! - Accept host overrides as JSON with per-field defaults.
//!
//! # Invariants
//! - All thresholds are finite and non-negative after `validate`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Distance of the active-section reference line from the viewport top.
pub const DEFAULT_REFERENCE_LINE_PX: f64 = 100.0;
/// Scroll offset after which the nav bar switches to its "scrolled" style.
pub const DEFAULT_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Interaction thresholds for one page session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_reference_line_px")]
    pub reference_line_px: f64,
    #[serde(default = "default_scrolled_threshold_px")]
    pub scrolled_threshold_px: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            reference_line_px: DEFAULT_REFERENCE_LINE_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
        }
    }
}

impl PageConfig {
    /// Parses a JSON override; missing fields keep their defaults.
    ///
    /// Blank input yields the default config.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PageConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("reference_line_px", self.reference_line_px)?;
        check_threshold("scrolled_threshold_px", self.scrolled_threshold_px)?;
        Ok(())
    }
}

/// Config decode/validation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    InvalidThreshold { field: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(details) => write!(f, "page config parse failed: {details}"),
            Self::InvalidThreshold { field, value } => {
                write!(f, "`{field}` must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidThreshold { field, value });
    }
    Ok(())
}

fn default_reference_line_px() -> f64 {
    DEFAULT_REFERENCE_LINE_PX
}

fn default_scrolled_threshold_px() -> f64 {
    DEFAULT_SCROLLED_THRESHOLD_PX
}
