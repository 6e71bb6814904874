//! Error handling for CabinetKit
//!
//! The crate-level [`Error`] covers catalog and configuration problems that
//! every layer can hit. Component crates define their own `thiserror` enums
//! and convert into this one at the pipeline boundary.

use thiserror::Error;

/// Main error type for CabinetKit
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog or factory configuration is unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input data violates a manufacturing rule
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced catalog entry does not exist
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of entry ("material", "hardware", ...).
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a not-found error for a catalog entry
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::NotFound { .. })
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("material", "MEL-18");
        assert_eq!(err.to_string(), "material not found: MEL-18");

        let err = Error::config("profit margin must be below 100");
        assert_eq!(
            err.to_string(),
            "Configuration error: profit margin must be below 100"
        );
    }

    #[test]
    fn test_config_classification() {
        assert!(Error::config("x").is_config_error());
        assert!(Error::not_found("hardware", "h1").is_config_error());
        assert!(!Error::other("x").is_config_error());
    }
}
