//! Core error types for robomodoro-core.
//!
//! The engine itself cannot fail; these cover configuration and the
//! file system around it.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for robomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn read_config(path: &std::path::Path) -> Result<String> {
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Err(ConfigError::UnknownKey("durations".into()).into());
        }
        Ok(raw)
    }

    #[test]
    fn io_failures_become_core_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn config_failures_keep_their_detail() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::UnknownKey(_))));
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: durations"
        );
    }
}
