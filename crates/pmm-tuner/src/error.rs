//! Error types for pmm-tuner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TunerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type TunerResult<T> = Result<T, TunerError>;
