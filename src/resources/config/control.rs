use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{
    ConfigError, DEFAULT_THROTTLE, LINE_SCROLL_PIXELS, MOUSE_SCALE, PITCH_SENSITIVITY,
    ROLL_SENSITIVITY, THROTTLE_PRESETS, THROTTLE_STEP, WHEEL_THROTTLE_SCALE, YAW_SENSITIVITY,
};

/// Tuning for the control mapper and the throttle/flap transition table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub pitch_sensitivity: f64,
    pub roll_sensitivity: f64,
    /// Fixed scale applied to the keyboard yaw axis.
    pub yaw_sensitivity: f64,
    /// Converts mouse pixels into stick deflection.
    pub mouse_scale: f64,
    /// Throttle change per key-down edge.
    pub throttle_step: f64,
    /// Throttle change per wheel pixel.
    pub wheel_scale: f64,
    /// Absolute throttle values bound to the number keys, starting at `1`.
    pub throttle_presets: Vec<f64>,
    pub default_throttle: f64,
    /// Pixel equivalent of a line-based wheel notch.
    pub line_scroll_pixels: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            pitch_sensitivity: PITCH_SENSITIVITY,
            roll_sensitivity: ROLL_SENSITIVITY,
            yaw_sensitivity: YAW_SENSITIVITY,
            mouse_scale: MOUSE_SCALE,
            throttle_step: THROTTLE_STEP,
            wheel_scale: WHEEL_THROTTLE_SCALE,
            throttle_presets: THROTTLE_PRESETS.to_vec(),
            default_throttle: DEFAULT_THROTTLE,
            line_scroll_pixels: LINE_SCROLL_PIXELS,
        }
    }
}

impl ControlConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("pitch_sensitivity", self.pitch_sensitivity),
            ("roll_sensitivity", self.roll_sensitivity),
            ("yaw_sensitivity", self.yaw_sensitivity),
            ("mouse_scale", self.mouse_scale),
            ("throttle_step", self.throttle_step),
            ("wheel_scale", self.wheel_scale),
            ("line_scroll_pixels", self.line_scroll_pixels),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(name, value));
            }
        }

        if self.throttle_presets.len() > 9 {
            return Err(ConfigError::invalid(
                "throttle_presets",
                format!("{} entries (at most 9)", self.throttle_presets.len()),
            ));
        }
        if let Some(bad) = self
            .throttle_presets
            .iter()
            .chain(std::iter::once(&self.default_throttle))
            .find(|v| !(0.0..=1.0).contains(*v))
        {
            return Err(ConfigError::invalid("throttle", bad));
        }

        debug!("Control config validated: {:?}", self);
        Ok(())
    }
}
