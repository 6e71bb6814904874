//! Recompute from module parameters
//!
//! One pass turns a module into its finished piece list, hardware
//! assignment and diagnostics. The pass builds a fresh result and never
//! mutates its inputs, so repeating it with the same inputs yields the same
//! output.

use crate::carcass::generate_module_pieces;
use crate::context::ConstructionContext;
use crate::dimensions::{DimensionResolver, EdgeThicknessSource};
use crate::error::DesignResult;
use crate::hardware_rules;
use cabinetkit_core::{HardwareAssignment, ModuleId, ModuleSpec, Piece, ValidationWarning};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Pieces and hardware of one module after a recompute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePieces {
    pub module_id: ModuleId,
    pub pieces: Vec<Piece>,
    pub hardware: HardwareAssignment,
    pub warnings: Vec<ValidationWarning>,
    /// Pieces came from the module's manual override
    pub from_override: bool,
}

/// The module's manual override when set, else the rule output
pub fn current_pieces(module: &ModuleSpec, ctx: &ConstructionContext) -> DesignResult<Vec<Piece>> {
    match &module.custom_pieces {
        Some(pieces) => Ok(pieces.clone()),
        None => generate_module_pieces(module, ctx),
    }
}

/// Recompute a module's pieces, hardware and warnings
pub fn recompute<S: EdgeThicknessSource + ?Sized>(
    module: &ModuleSpec,
    ctx: &ConstructionContext,
    edges: &S,
) -> DesignResult<ModulePieces> {
    let pieces = current_pieces(module, ctx)?;
    let hardware = hardware_rules::assign(module, &pieces);

    let resolver = DimensionResolver::new(edges);
    let warnings: Vec<ValidationWarning> =
        pieces.iter().flat_map(|p| resolver.warnings(p)).collect();
    for warning in &warnings {
        warn!(module = %module.label(), "{}", warning);
    }

    Ok(ModulePieces {
        module_id: module.id.clone(),
        pieces,
        hardware,
        warnings,
        from_override: module.has_custom_pieces(),
    })
}
