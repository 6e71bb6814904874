//! # CabinetKit Designer
//!
//! Turns a parametric [`ModuleSpec`](cabinetkit_core::ModuleSpec) into a
//! finalized piece list.
//!
//! ## Components
//!
//! - **Dimension Resolver**: finished size to saw-cut size through edge-band thickness
//! - **Drawer Piece Generator**: metal and melamine drawer box topologies
//! - **Carcass**: laterals, floor, ceiling/stretchers, back, shelves and doors
//! - **Hardware Rules**: leg, hinge and slide quantities
//! - **Edits and Commands**: pure module edits and typed piece overrides
//! - **Batch**: parallel propagation of an override to template siblings
//! - **BOM / Cut-list**: board area, banding metres and optimizer CSV

pub mod batch;
pub mod bom;
pub mod carcass;
pub mod commands;
pub mod context;
pub mod cutlist;
pub mod dimensions;
pub mod drawers;
pub mod edits;
pub mod error;
pub mod hardware_rules;
pub mod recompute;

pub use batch::{propagate_command, propagate_edit};
pub use bom::{BoardLine, Bom, EdgeLine};
pub use carcass::generate_module_pieces;
pub use commands::{apply_piece_command, PieceCommand, PieceSelector};
pub use context::ConstructionContext;
pub use cutlist::{cutlist_csv_string, write_cutlist_csv, CUTLIST_HEADER};
pub use dimensions::{edge_runs, CutDimensions, DimensionResolver, EdgeDiscounts, EdgeRun, EdgeThicknessSource};
pub use drawers::{DrawerConfig, DrawerPieceGenerator};
pub use edits::{apply_module_edit, EditOutcome, ModuleEdit};
pub use error::{DesignError, DesignResult};
pub use recompute::{current_pieces, recompute, ModulePieces};
