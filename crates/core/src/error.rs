//! Core error types

use thiserror::Error;

/// Result alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required setting was not provided
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    /// A setting was present but could not be parsed
    #[error("Invalid value for {key}: {value}")]
    Invalid {
        /// Setting name
        key: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
