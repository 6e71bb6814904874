//! Error types for the settings crate.
//!
//! This module provides structured error types for loading, saving and
//! validating factory catalogs and module files.

use std::io;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file could not be loaded.
    #[error("Failed to load settings: {0}")]
    LoadError(String),

    /// The file could not be saved.
    #[error("Failed to save settings: {0}")]
    SaveError(String),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),

    /// A configuration value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The configuration directory could not be resolved.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl SettingsError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<SettingsError> for cabinetkit_core::Error {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::IoError(io) => cabinetkit_core::Error::Io(io),
            other => cabinetkit_core::Error::config(other.to_string()),
        }
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::invalid("global.profit_margin", "must be in [0, 100)");
        assert_eq!(
            err.to_string(),
            "Invalid setting 'global.profit_margin': must be in [0, 100)"
        );

        let err = SettingsError::UnsupportedFormat("factory.yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported settings format: factory.yaml");
    }

    #[test]
    fn test_conversion_into_core_error() {
        let err: cabinetkit_core::Error = SettingsError::invalid("k", "r").into();
        assert!(err.is_config_error());

        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: cabinetkit_core::Error = SettingsError::from(io_err).into();
        assert!(matches!(err, cabinetkit_core::Error::Io(_)));
    }
}
