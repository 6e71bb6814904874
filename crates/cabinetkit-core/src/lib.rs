//! # CabinetKit Core
//!
//! Core types shared by every CabinetKit crate: the factory catalog
//! (materials, hardware, machines), the piece and module model, rounding
//! helpers and the unified error type.

pub mod data;
pub mod diagnostics;
pub mod error;
pub mod units;

pub use data::{
    AxisLink, BackMounting, ConstructionDefaults, ConsumablesRates, DrawerSystem, DrillProfile,
    EdgeBand, EdgeSlot, EdgeSlots, FactoryConfig, GlobalConfig, HardwareAssignment,
    HardwareCatalog, HardwareId, HardwareItem, HardwareKind, HingeProfile, HingeRule, HingeSide,
    LegProfile, LegRule, Machine, MachineKind, Material, MaterialId, MaterialKind,
    MaterialLibrary, MinifixProfile, ModuleAxis, ModuleId, ModuleSpec, Piece, PieceAxis, PieceId,
    PieceRole, ResizeRule, ShelfPinProfile, SlideProfile, SlideRule, Zone,
};
pub use diagnostics::{ValidationWarning, WarningKind};
pub use error::{Error, Result};
