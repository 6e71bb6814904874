//! End-to-end planning pipeline
//!
//! Wires the crates together: modules are recomputed into pieces, pieces
//! are planned for machining, and the plan feeds the cut list, the BOM,
//! the DXF exports and the cost breakdown.

use cabinetkit_camtools::{plan_pieces, PieceMachining, PlanInputs};
use cabinetkit_core::{
    FactoryConfig, HardwareCatalog, MaterialLibrary, ModuleSpec, Piece, Result,
    ValidationWarning, WarningKind,
};
use cabinetkit_costing::{CostAggregator, CostBreakdown};
use cabinetkit_designer::{recompute, write_cutlist_csv, Bom, ConstructionContext, ModulePieces};
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, info, warn};

/// One module after recompute and machining planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulePlan {
    pub name: String,
    #[serde(flatten)]
    pub pieces: ModulePieces,
    pub machining: Vec<PieceMachining>,
}

impl ModulePlan {
    /// Base file name for this module's exports
    pub fn file_stem(&self) -> String {
        sanitize(&self.pieces.module_id.0)
    }
}

/// Plan of a whole order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub modules: Vec<ModulePlan>,
}

impl Plan {
    /// Every piece of every module, in module order
    pub fn pieces(&self) -> Vec<Piece> {
        self.modules
            .iter()
            .flat_map(|m| m.pieces.pieces.iter().cloned())
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationWarning> {
        self.modules.iter().flat_map(|m| m.pieces.warnings.iter())
    }
}

/// A DXF document ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct DxfDocument {
    pub file_name: String,
    pub content: String,
}

fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// Planning pipeline over one factory configuration
pub struct Planner<'a> {
    factory: &'a FactoryConfig,
    materials: MaterialLibrary,
    hardware: HardwareCatalog,
    ctx: ConstructionContext,
}

impl<'a> Planner<'a> {
    pub fn new(factory: &'a FactoryConfig) -> Result<Self> {
        let ctx = ConstructionContext::from_factory(factory)?;
        Ok(Self {
            factory,
            materials: factory.material_library(),
            hardware: factory.hardware_catalog(),
            ctx,
        })
    }

    pub fn context(&self) -> &ConstructionContext {
        &self.ctx
    }

    /// Recompute one module and plan its machining
    pub fn plan_module(&self, module: &ModuleSpec) -> Result<ModulePlan> {
        let mut pieces = recompute(module, &self.ctx, &self.materials)?;

        let hinge = match (module.door_count, module.hinge_id.as_ref()) {
            (0, _) => None,
            (_, Some(id)) => {
                let profile = self.hardware.hinge_profile(id);
                if profile.is_none() {
                    pieces.warnings.push(ValidationWarning::new(
                        WarningKind::MissingHardware,
                        module.label(),
                        format!("hinge '{}' is not a hinge in the catalog; doors not drilled", id),
                    ));
                }
                profile
            }
            (_, None) => {
                pieces.warnings.push(ValidationWarning::new(
                    WarningKind::MissingHardware,
                    module.label(),
                    "module has doors but no hinge; doors not drilled",
                ));
                None
            }
        };

        let shelf_pin = self.hardware.shelf_pin();
        if module.shelf_count > 0 && shelf_pin.is_none() {
            pieces.warnings.push(ValidationWarning::new(
                WarningKind::MissingHardware,
                module.label(),
                "no shelf pin in the catalog; laterals not drilled for shelves",
            ));
        }

        let inputs = PlanInputs {
            hinge,
            hinges_per_door: pieces.hardware.hinges.per_door,
            minifix: self.hardware.minifix(),
            shelf_pin,
            shelf_count: module.shelf_count,
            board_thickness: self.ctx.thickness,
        };
        let machining = plan_pieces(&pieces.pieces, &self.materials, &inputs)?;

        for warning in pieces.warnings.iter().filter(|w| w.kind == WarningKind::MissingHardware) {
            warn!("{}", warning);
        }
        debug!(
            module = %module.label(),
            pieces = pieces.pieces.len(),
            machined = machining.len(),
            "Planned module"
        );

        Ok(ModulePlan {
            name: module.label().to_string(),
            pieces,
            machining,
        })
    }

    /// Plan every module in order
    pub fn plan(&self, modules: &[ModuleSpec]) -> Result<Plan> {
        let modules = modules
            .iter()
            .map(|m| self.plan_module(m))
            .collect::<Result<Vec<_>>>()?;
        let plan = Plan { modules };
        info!(
            modules = plan.modules.len(),
            warnings = plan.warnings().count(),
            "Plan ready"
        );
        Ok(plan)
    }

    /// Write the optimizer cut list, returning the number of rows
    pub fn write_cutlist<W: io::Write>(&self, plan: &Plan, writer: W) -> Result<usize> {
        Ok(write_cutlist_csv(
            &plan.pieces(),
            &self.materials,
            &self.ctx.board,
            writer,
        )?)
    }

    pub fn bom(&self, plan: &Plan) -> Bom {
        Bom::from_pieces(&plan.pieces(), &self.materials, &self.ctx.board)
    }

    /// One DXF per machined piece, named `<module>_<piece>.dxf`
    pub fn dxf_documents(&self, plan: &Plan) -> Result<Vec<DxfDocument>> {
        let mut documents = Vec::new();
        for module in &plan.modules {
            let stem = module.file_stem();
            for piece in &module.machining {
                documents.push(DxfDocument {
                    file_name: format!("{}_{}.dxf", stem, sanitize(&piece.piece_id().0)),
                    content: piece.to_dxf()?,
                });
            }
        }
        Ok(documents)
    }

    /// Cost the planned pieces
    pub fn quote(&self, plan: &Plan, modules: &[ModuleSpec]) -> Result<CostBreakdown> {
        let breakdown = CostAggregator::new(self.factory).aggregate(&plan.pieces(), modules)?;
        info!(
            total_cost = breakdown.totals.total_cost,
            suggested_price = breakdown.totals.suggested_price,
            "Quote ready"
        );
        Ok(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_names() {
        assert_eq!(sanitize("door-left"), "door-left");
        assert_eq!(sanitize("Sink base/1"), "Sink_base_1");
    }
}
