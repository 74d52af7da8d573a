//! Error types for the launchpad binary

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchpadError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<toml::ser::Error> for LaunchpadError {
    fn from(err: toml::ser::Error) -> Self {
        LaunchpadError::SerializationError(err.to_string())
    }
}

pub type LaunchpadResult<T> = Result<T, LaunchpadError>;
