use std::io;
use thiserror::Error;

use crate::physics::PhysicsError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session faulted, reset required: {0}")]
    SessionFaulted(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter '{name}' with value '{value}'")]
    InvalidParameter { name: String, value: String },
}

impl ConfigError {
    pub fn invalid(name: &str, value: impl ToString) -> Self {
        ConfigError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
