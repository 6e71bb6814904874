//! Data models for the factory catalog and cabinet geometry
//!
//! This module provides:
//! - Materials (boards, edge bands, generic hardware stock)
//! - Hardware catalog with per-kind install profiles
//! - Machines used for cutting, banding and drilling
//! - Pieces with edge slots, structural roles and resize rules
//! - Module specifications and factory configuration

pub mod factory;
pub mod hardware;
pub mod machines;
pub mod materials;
pub mod modules;
pub mod pieces;

pub use factory::{ConstructionDefaults, ConsumablesRates, FactoryConfig, GlobalConfig};
pub use hardware::{
    DrillProfile, HardwareAssignment, HardwareCatalog, HardwareId, HardwareItem, HardwareKind,
    HingeProfile, HingeRule, LegProfile, LegRule, MinifixProfile, ShelfPinProfile, SlideProfile,
    SlideRule,
};
pub use machines::{Machine, MachineKind};
pub use materials::{Material, MaterialId, MaterialKind, MaterialLibrary};
pub use modules::{BackMounting, DrawerSystem, ModuleId, ModuleSpec, Zone};
pub use pieces::{
    AxisLink, EdgeBand, EdgeSlot, EdgeSlots, HingeSide, ModuleAxis, Piece, PieceAxis, PieceId,
    PieceRole, ResizeRule,
};
