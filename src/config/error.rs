//! Configuration error definitions

use std::error::Error;
use std::fmt;

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error while reading the configuration file
    IoError(std::io::Error),
    /// The file is not valid configuration JSON
    ParseError(serde_json::Error),
    /// A setting is out of range
    InvalidValue(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(err) => write!(f, "I/O error: {}", err),
            ConfigError::ParseError(err) => write!(f, "Parse error: {}", err),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IoError(err) => Some(err),
            ConfigError::ParseError(err) => Some(err),
            ConfigError::InvalidValue(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
