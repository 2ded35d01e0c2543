//! Sidebar tuning knobs (reveal edge, width bounds).
//!
//! Values come from JSON in local storage when present and fall back to the
//! built-in defaults otherwise. Every loaded value is validated before use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REVEAL_THRESHOLD_PX: f64 = 30.0;
pub const DEFAULT_MIN_WIDTH_PX: f64 = 192.0;
pub const DEFAULT_MAX_WIDTH_PX: f64 = 384.0;
pub const DEFAULT_WIDTH_PX: f64 = 256.0;

#[derive(Debug, thiserror::Error)]
pub enum SidebarConfigError {
    #[error("sidebar config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("reveal threshold must be a finite, non-negative pixel count (got {0})")]
    InvalidThreshold(f64),
    #[error("width range is invalid: min {min}px, max {max}px")]
    InvalidWidthRange { min: f64, max: f64 },
    #[error("default width {width}px is outside {min}px..={max}px")]
    DefaultWidthOutOfRange { width: f64, min: f64, max: f64 },
}

/// Sidebar configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Pointer x-coordinate at or below which a hidden sidebar is revealed.
    pub reveal_threshold_px: f64,
    pub min_width_px: f64,
    pub max_width_px: f64,
    /// Width handed to the sidebar before the user resizes it.
    pub default_width_px: f64,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            reveal_threshold_px: DEFAULT_REVEAL_THRESHOLD_PX,
            min_width_px: DEFAULT_MIN_WIDTH_PX,
            max_width_px: DEFAULT_MAX_WIDTH_PX,
            default_width_px: DEFAULT_WIDTH_PX,
        }
    }
}

impl SidebarConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is malformed or the values fail
    /// [`SidebarConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, SidebarConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency of the configured values.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), SidebarConfigError> {
        if !self.reveal_threshold_px.is_finite() || self.reveal_threshold_px < 0.0 {
            return Err(SidebarConfigError::InvalidThreshold(self.reveal_threshold_px));
        }
        let (min, max) = (self.min_width_px, self.max_width_px);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(SidebarConfigError::InvalidWidthRange { min, max });
        }
        if !(min..=max).contains(&self.default_width_px) {
            return Err(SidebarConfigError::DefaultWidthOutOfRange { width: self.default_width_px, min, max });
        }
        Ok(())
    }

    /// Clamp a requested width into the configured bounds.
    pub fn clamp_width(&self, width: f64) -> f64 {
        width.clamp(self.min_width_px, self.max_width_px)
    }
}
