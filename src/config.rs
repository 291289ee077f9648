//! Viewport configuration.
//!
//! Every field has a default taken from [`crate::consts`], so an empty JSON
//! object (or no configuration at all) yields the stock behavior. The host may
//! override individual values when attaching to a canvas.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camera::ZoomLimits;
use crate::consts::{
    GRID_COLOR, GRID_DASH_PX, GRID_SPACING, INITIAL_SCALE, MAX_SCALE, MIN_GRID_SPACING, MIN_SCALE, PINCH_THRESHOLD_PX,
    WHEEL_PAN_SPEED, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};

/// Errors produced while loading a [`ViewportConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid viewport config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scale range [{min}, {max}] is empty or not positive")]
    ScaleRange { min: f64, max: f64 },
    #[error("scale range [{min}, {max}] excludes the initial scale {}", INITIAL_SCALE)]
    ScaleExcludesInitial { min: f64, max: f64 },
    #[error("grid spacing must be finite and at least {}, got {}", MIN_GRID_SPACING, .0)]
    Spacing(f64),
    #[error("dash length must be positive and finite, got {0}")]
    DashLength(f64),
    #[error("wheel zoom factor must be positive and finite, got {0}")]
    WheelZoom(f64),
    #[error("wheel pan speed must be finite, got {0}")]
    WheelPanSpeed(f64),
    #[error("pinch threshold must be non-negative and finite, got {0}")]
    PinchThreshold(f64),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

/// Tunable parameters of the camera, grid and gesture handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    /// Smallest allowed camera scale.
    pub min_scale: f64,
    /// Largest allowed camera scale.
    pub max_scale: f64,
    /// Grid line spacing in logical units.
    pub grid_spacing: f64,
    /// Dash and gap length of grid lines, in screen pixels.
    pub dash_length: f64,
    /// CSS color of the grid lines.
    pub grid_color: String,
    /// Scale factor for a modifier-wheel step with negative `deltaY`.
    pub wheel_zoom_in: f64,
    /// Scale factor for a modifier-wheel step with non-negative `deltaY`.
    pub wheel_zoom_out: f64,
    /// Multiplier from wheel delta to pan distance.
    pub wheel_pan_speed: f64,
    /// Contact-distance change separating pinch from two-finger pan.
    pub pinch_threshold_px: f64,
    /// Console log level used by the browser binding.
    pub log_level: String,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            grid_spacing: GRID_SPACING,
            dash_length: GRID_DASH_PX,
            grid_color: GRID_COLOR.to_owned(),
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            wheel_pan_speed: WHEEL_PAN_SPEED,
            pinch_threshold_px: PINCH_THRESHOLD_PX,
            log_level: "info".to_owned(),
        }
    }
}

impl ViewportConfig {
    /// Parse and validate a configuration from JSON. Missing fields keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and the other variants when [`ViewportConfig::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !(min > 0.0 && min <= max && max.is_finite()) {
            return Err(ConfigError::ScaleRange { min, max });
        }
        if !(min..=max).contains(&INITIAL_SCALE) {
            return Err(ConfigError::ScaleExcludesInitial { min, max });
        }
        if !(self.grid_spacing >= MIN_GRID_SPACING && self.grid_spacing.is_finite()) {
            return Err(ConfigError::Spacing(self.grid_spacing));
        }
        if !(self.dash_length > 0.0 && self.dash_length.is_finite()) {
            return Err(ConfigError::DashLength(self.dash_length));
        }
        for factor in [self.wheel_zoom_in, self.wheel_zoom_out] {
            if !(factor > 0.0 && factor.is_finite()) {
                return Err(ConfigError::WheelZoom(factor));
            }
        }
        if !self.wheel_pan_speed.is_finite() {
            return Err(ConfigError::WheelPanSpeed(self.wheel_pan_speed));
        }
        if !(self.pinch_threshold_px >= 0.0 && self.pinch_threshold_px.is_finite()) {
            return Err(ConfigError::PinchThreshold(self.pinch_threshold_px));
        }
        self.level()?;
        Ok(())
    }

    /// The configured scale bounds.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits { min: self.min_scale, max: self.max_scale }
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] when `log_level` is not a `log` level name.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
