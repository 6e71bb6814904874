//! Error types for the designer crate.

use cabinetkit_core::{MaterialId, MaterialKind, ModuleId};
use std::io;
use thiserror::Error;

/// Errors that can occur while deriving or editing pieces.
#[derive(Error, Debug)]
pub enum DesignError {
    /// A construction default references a missing material.
    #[error("Material not found: {0}")]
    MaterialNotFound(MaterialId),

    /// A construction default references a material of the wrong kind.
    #[error("Material '{id}' is {actual}, expected {expected}")]
    WrongMaterialKind {
        id: MaterialId,
        expected: MaterialKind,
        actual: MaterialKind,
    },

    /// The module geometry cannot produce physical pieces.
    #[error("Invalid module '{module_id}': {reason}")]
    InvalidModule { module_id: ModuleId, reason: String },

    /// A piece command selector matched nothing.
    #[error("No piece matches {selector} in module '{module_id}'")]
    NoMatchingPiece { module_id: ModuleId, selector: String },

    /// An edit or override carries an unusable value.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl DesignError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<DesignError> for cabinetkit_core::Error {
    fn from(err: DesignError) -> Self {
        let message = err.to_string();
        match err {
            DesignError::MaterialNotFound(id) => cabinetkit_core::Error::not_found("material", id.0),
            DesignError::WrongMaterialKind { .. } => cabinetkit_core::Error::config(message),
            DesignError::Io(io) => cabinetkit_core::Error::Io(io),
            _ => cabinetkit_core::Error::Validation(message),
        }
    }
}

/// Result type alias for designer operations.
pub type DesignResult<T> = Result<T, DesignError>;
