//! Error types for the CAM tools crate.
//!
//! Machining errors are fabrication-safety failures: a hole outside its
//! panel or deeper than the board is rejected, never clamped or dropped.

use thiserror::Error;

/// Errors raised while generating or validating machining operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MachiningError {
    /// An operation's hole does not fit inside the face it is drilled on.
    #[error(
        "Operation '{operation}' on piece '{piece_id}' at ({x:.3}, {y:.3}) lies outside its {width:.1} x {height:.1} face"
    )]
    OutOfBounds {
        piece_id: String,
        operation: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// A face operation would drill through the board.
    #[error(
        "Operation '{operation}' on piece '{piece_id}' is {depth} mm deep in a {thickness} mm board"
    )]
    DepthExceedsThickness {
        piece_id: String,
        operation: String,
        depth: f64,
        thickness: f64,
    },

    /// The install profile or piece geometry is unusable.
    #[error("Invalid machining spec: {0}")]
    InvalidSpec(String),
}

/// Errors raised while serializing a DXF document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DxfError {
    /// Operation failed validation against the piece outline.
    #[error(transparent)]
    Machining(#[from] MachiningError),

    /// Only front-face operations can be drawn.
    #[error("Operation '{operation}' on piece '{piece_id}' is on an edge face and cannot be drawn")]
    EdgeOperation { piece_id: String, operation: String },

    /// Piece outline is degenerate.
    #[error("Invalid outline for piece '{piece_id}': {width} x {height}")]
    InvalidOutline {
        piece_id: String,
        width: f64,
        height: f64,
    },

    /// More tool layers than distinct ACI colours.
    #[error("Piece '{piece_id}' uses {layers} tool layers; at most {max} can get distinct colours")]
    TooManyLayers {
        piece_id: String,
        layers: usize,
        max: usize,
    },
}

impl From<MachiningError> for cabinetkit_core::Error {
    fn from(err: MachiningError) -> Self {
        cabinetkit_core::Error::Validation(err.to_string())
    }
}

impl From<DxfError> for cabinetkit_core::Error {
    fn from(err: DxfError) -> Self {
        cabinetkit_core::Error::Validation(err.to_string())
    }
}

/// Result type alias for machining operations.
pub type MachiningResult<T> = Result<T, MachiningError>;

/// Result type alias for DXF serialization.
pub type DxfResult<T> = Result<T, DxfError>;
