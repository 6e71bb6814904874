//! Error types for the costing crate.

use thiserror::Error;

/// Errors that can occur while aggregating costs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostError {
    /// The profit margin is not a share of the sale price.
    #[error("Profit margin {0}% must be in [0, 100)")]
    InvalidMargin(f64),
}

impl From<CostError> for cabinetkit_core::Error {
    fn from(err: CostError) -> Self {
        cabinetkit_core::Error::config(err.to_string())
    }
}

/// Result type alias for costing operations.
pub type CostResult<T> = Result<T, CostError>;
