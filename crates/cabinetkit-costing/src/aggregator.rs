//! Cost aggregator
//!
//! Rolls a project's pieces and modules up into material, hardware,
//! consumable and machine costs plus a suggested sale price. The margin is
//! a share of the sale price: at 40 % the cost is 60 % of the price.

use crate::error::{CostError, CostResult};
use crate::machine_time::{machine_line, MachineLine};
use cabinetkit_core::units::{mm_to_m, round_cents, round_to};
use cabinetkit_core::{
    FactoryConfig, GlobalConfig, HardwareCatalog, HardwareId, Machine, MachineKind, MaterialId,
    MaterialKind, MaterialLibrary, ModuleSpec, Piece, ValidationWarning, WarningKind,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Screws per hinge
const SCREWS_PER_HINGE: u32 = 4;
/// Screws per slide pair
const SCREWS_PER_SLIDE: u32 = 12;
/// Assembly screws per module
const SCREWS_PER_MODULE: u32 = 8;

/// Hinges per door used for pricing, by door height.
///
/// This bracket table is independent of the assembly rule in the designer
/// and gives different counts for the same height.
pub fn cost_hinges_per_door(door_height: f64) -> u32 {
    if door_height < 900.0 {
        2
    } else if door_height <= 1600.0 {
        3
    } else if door_height <= 2100.0 {
        4
    } else {
        5
    }
}

/// One priced hardware line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTotals {
    pub total_cost: f64,
    pub suggested_price: f64,
    /// Margin on sale price in percent
    pub margin: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostStats {
    pub hinges: u32,
    pub slides: u32,
    pub screws: u32,
    pub edge_meters: f64,
    pub cutting_meters: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub materials: f64,
    pub hardware: f64,
    pub consumables: f64,
    pub operations: f64,
    pub totals: CostTotals,
    pub stats: CostStats,
    /// Sorted by hardware name
    pub hardware_lines: Vec<HardwareLine>,
    /// Cutting first, then edge banding
    pub machine_lines: Vec<MachineLine>,
    #[serde(default)]
    pub warnings: Vec<ValidationWarning>,
}

/// Aggregates project costs against a factory catalog
pub struct CostAggregator<'a> {
    materials: MaterialLibrary,
    hardware: HardwareCatalog,
    machines: &'a [Machine],
    global: &'a GlobalConfig,
    default_board: &'a MaterialId,
}

impl<'a> CostAggregator<'a> {
    pub fn new(factory: &'a FactoryConfig) -> Self {
        Self {
            materials: factory.material_library(),
            hardware: factory.hardware_catalog(),
            machines: &factory.machines,
            global: &factory.global,
            default_board: &factory.construction.board_material,
        }
    }

    fn machine(&self, kind: MachineKind) -> Option<&Machine> {
        self.machines.iter().find(|m| m.kind == kind)
    }

    fn unit_cost(&self, id: &MaterialId) -> Option<f64> {
        self.materials.get_material(id).map(|m| m.unit_cost)
    }

    /// Aggregate the cost of `pieces` belonging to `modules`
    pub fn aggregate(&self, pieces: &[Piece], modules: &[ModuleSpec]) -> CostResult<CostBreakdown> {
        let margin = self.global.profit_margin;
        if !margin.is_finite() || !(0.0..100.0).contains(&margin) {
            return Err(CostError::InvalidMargin(margin));
        }

        let mut warnings = Vec::new();

        // Materials
        let mut materials = 0.0;
        let mut edge_meters = 0.0;
        let mut cutting_meters = 0.0;
        for piece in pieces {
            let board = piece.material.as_ref().unwrap_or(self.default_board);
            if self
                .materials
                .get_material(board)
                .is_some_and(|m| m.kind == MaterialKind::Hardware)
            {
                continue;
            }
            match self.unit_cost(board) {
                Some(cost) => materials += piece.area_m2() * cost,
                None => {
                    warn!(piece = %piece.id, material = %board, "Board material has no price");
                    warnings.push(ValidationWarning::new(
                        WarningKind::UnknownMaterial,
                        &piece.id.0,
                        format!("board material '{}' is not in the catalog", board),
                    ));
                }
            }
            cutting_meters += piece.perimeter_m();

            for (slot, band) in piece.edges.occupied() {
                let Some(edge) = band.material() else {
                    continue;
                };
                let meters = mm_to_m(piece.final_size(slot.runs_along()) * f64::from(piece.quantity));
                edge_meters += meters;
                match self.unit_cost(edge) {
                    Some(cost) => materials += meters * cost,
                    None => warnings.push(ValidationWarning::new(
                        WarningKind::UnknownEdgeMaterial,
                        &piece.id.0,
                        format!("edge material '{}' has no price", edge),
                    )),
                }
            }
        }

        // Hardware
        let mut lines: BTreeMap<String, HardwareLine> = BTreeMap::new();
        let mut hinges = 0;
        let mut slides = 0;
        for module in modules {
            if module.door_count > 0 {
                let count = cost_hinges_per_door(module.height) * module.door_count;
                hinges += count;
                self.add_hardware(
                    &mut lines,
                    &mut warnings,
                    module,
                    module.hinge_id.as_ref(),
                    "hinge",
                    count,
                );
            }
            if module.drawer_count > 0 {
                slides += module.drawer_count;
                self.add_hardware(
                    &mut lines,
                    &mut warnings,
                    module,
                    module.slide_id.as_ref(),
                    "slide",
                    module.drawer_count,
                );
            }
        }
        let hardware_lines: Vec<HardwareLine> = lines
            .into_values()
            .map(|mut line| {
                line.total = round_cents(line.total);
                line
            })
            .collect();
        let hardware: f64 = hardware_lines.iter().map(|l| l.total).sum();

        // Consumables
        let module_count = modules.len() as u32;
        let screws = hinges * SCREWS_PER_HINGE
            + slides * SCREWS_PER_SLIDE
            + module_count * SCREWS_PER_MODULE;
        let rates = &self.global.consumables;
        let consumables = f64::from(module_count) * rates.glue_per_module
            + f64::from(screws) * rates.screw_unit_price;

        // Operations
        let energy = self.global.energy_price_per_kwh;
        let machine_lines: Vec<MachineLine> = [
            (MachineKind::Cutting, cutting_meters),
            (MachineKind::EdgeBanding, edge_meters),
        ]
        .into_iter()
        .map(|(kind, meters)| match self.machine(kind) {
            Some(machine) => machine_line(machine, meters, energy),
            None => {
                warn!(kind = %kind, "No machine configured; operation cost is zero");
                warnings.push(ValidationWarning::new(
                    WarningKind::MissingMachine,
                    kind.to_string(),
                    format!("no {} machine configured", kind),
                ));
                MachineLine::missing(kind, meters)
            }
        })
        .collect();
        let operations: f64 = machine_lines.iter().map(|l| l.cost).sum();

        let materials = round_cents(materials);
        let consumables = round_cents(consumables);
        let hardware = round_cents(hardware);
        let operations = round_cents(operations);
        let total_cost = round_cents(materials + hardware + consumables + operations);
        let suggested_price = round_cents(total_cost / (1.0 - margin / 100.0));

        debug!(
            pieces = pieces.len(),
            modules = modules.len(),
            total_cost,
            suggested_price,
            "Aggregated costs"
        );

        Ok(CostBreakdown {
            materials,
            hardware,
            consumables,
            operations,
            totals: CostTotals {
                total_cost,
                suggested_price,
                margin,
            },
            stats: CostStats {
                hinges,
                slides,
                screws,
                edge_meters: round_to(edge_meters, 2),
                cutting_meters: round_to(cutting_meters, 2),
            },
            hardware_lines,
            machine_lines,
            warnings,
        })
    }

    fn add_hardware(
        &self,
        lines: &mut BTreeMap<String, HardwareLine>,
        warnings: &mut Vec<ValidationWarning>,
        module: &ModuleSpec,
        id: Option<&HardwareId>,
        role: &str,
        quantity: u32,
    ) {
        let Some(item) = id.and_then(|id| self.hardware.get(id)) else {
            warn!(module = %module.label(), role, "No priced {} for module", role);
            warnings.push(ValidationWarning::new(
                WarningKind::MissingHardware,
                &module.id.0,
                format!("{} {}(s) counted but not priced", quantity, role),
            ));
            return;
        };
        if item.kind.name() != role {
            warn!(module = %module.label(), id = %item.id, role, "Hardware kind mismatch");
            warnings.push(ValidationWarning::new(
                WarningKind::MissingHardware,
                &module.id.0,
                format!(
                    "'{}' is a {}, not a {}; {} {}(s) counted but not priced",
                    item.id,
                    item.kind.name(),
                    role,
                    quantity,
                    role
                ),
            ));
            return;
        }
        let line = lines.entry(item.name.clone()).or_insert_with(|| HardwareLine {
            name: item.name.clone(),
            quantity: 0,
            unit_price: item.unit_price,
            total: 0.0,
        });
        line.quantity += quantity;
        line.total += f64::from(quantity) * item.unit_price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_hinge_brackets() {
        assert_eq!(cost_hinges_per_door(899.9), 2);
        assert_eq!(cost_hinges_per_door(900.0), 3);
        assert_eq!(cost_hinges_per_door(1600.0), 3);
        assert_eq!(cost_hinges_per_door(2100.0), 4);
        assert_eq!(cost_hinges_per_door(2100.1), 5);
    }
}
