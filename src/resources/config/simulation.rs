use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use super::ControlConfig;
use crate::utils::{ConfigError, MAX_FRAME_DT};

/// Session-level configuration for the flight controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub control: ControlConfig,
    /// Largest elapsed time accepted for one tick (s).
    pub max_dt: f64,
    /// Spawn position in world space [m]
    pub start_position: Vector3<f64>,
    /// Spawn heading [rad]
    pub start_heading: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            control: ControlConfig::default(),
            max_dt: MAX_FRAME_DT,
            start_position: Vector3::new(0.0, 300.0, 0.0),
            start_heading: 0.0,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.control.validate()?;
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(ConfigError::invalid("max_dt", self.max_dt));
        }
        if !self.start_position.iter().all(|v| v.is_finite()) {
            return Err(ConfigError::invalid("start_position", self.start_position));
        }
        if !self.start_heading.is_finite() {
            return Err(ConfigError::invalid("start_heading", self.start_heading));
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!("Loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }
}
