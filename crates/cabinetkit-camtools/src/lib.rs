//! # CabinetKit CAM Tools
//!
//! CNC drilling coordinates for cabinet pieces and their DXF export.
//!
//! ## Tools Included
//!
//! - **Machining Coordinate Generator**: hinge cups and pilots, Minifix cam/bolt joints, System32 shelf-pin rows
//! - **Validation**: every hole checked against its face and the board thickness before export
//! - **Machining Plan**: per-piece operations dispatched on structural role
//! - **DXF Serializer**: layered, deterministic ASCII DXF per piece

pub mod dxf_export;
pub mod error;
pub mod machining;
pub mod operations;
pub mod plan;

pub use dxf_export::{DxfSerializer, OUTLINE_LAYER};
pub use error::{DxfError, DxfResult, MachiningError, MachiningResult};
pub use machining::{
    hinge_operations, hinge_positions, minifix_horizontal, minifix_vertical, system32_rows,
    ConnectorSpec, MachiningCoordinateGenerator,
};
pub use operations::{
    layer_name, validate_operations, Face, Feature, MachiningOperation, OperationKind,
    PieceGeometry,
};
pub use plan::{plan_pieces, PieceMachining, PlanInputs};
