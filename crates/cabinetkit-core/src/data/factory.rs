//! Factory configuration: catalog plus global rates and construction defaults

use super::hardware::{HardwareCatalog, HardwareItem};
use super::machines::{Machine, MachineKind};
use super::materials::{Material, MaterialId, MaterialLibrary};
use serde::{Deserialize, Serialize};

/// Consumables pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumablesRates {
    /// Flat glue cost per module
    pub glue_per_module: f64,
    /// Price of one assembly screw
    pub screw_unit_price: f64,
}

impl Default for ConsumablesRates {
    fn default() -> Self {
        Self {
            glue_per_module: 0.5,
            screw_unit_price: 0.03,
        }
    }
}

/// Global pricing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub energy_price_per_kwh: f64,
    /// Margin on sale price, in percent (40 means cost is 60 % of price)
    pub profit_margin: f64,
    #[serde(default)]
    pub consumables: ConsumablesRates,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            energy_price_per_kwh: 0.28,
            profit_margin: 40.0,
            consumables: ConsumablesRates::default(),
        }
    }
}

/// Construction defaults used when deriving pieces from a module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionDefaults {
    /// Carcass and front board
    pub board_material: MaterialId,
    /// Banding applied to visible edges; `None` leaves them raw
    #[serde(default)]
    pub edge_material: Option<MaterialId>,
    /// Thin back panel board; `None` uses the carcass board
    #[serde(default)]
    pub back_material: Option<MaterialId>,
    /// Clearance on each side between drawer box and carcass
    pub slide_clearance: f64,
    /// Clearance between drawer box and back panel
    pub backend_clearance: f64,
    /// Gap around each door
    pub door_gap: f64,
    /// Depth of the top stretchers on base modules
    pub stretcher_depth: f64,
}

impl ConstructionDefaults {
    pub fn new(board_material: impl Into<MaterialId>) -> Self {
        Self {
            board_material: board_material.into(),
            edge_material: None,
            back_material: None,
            slide_clearance: 13.0,
            backend_clearance: 20.0,
            door_gap: 3.0,
            stretcher_depth: 100.0,
        }
    }
}

/// Everything the engine needs to know about a factory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub hardware: Vec<HardwareItem>,
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub global: GlobalConfig,
    pub construction: ConstructionDefaults,
}

impl FactoryConfig {
    pub fn material_library(&self) -> MaterialLibrary {
        self.materials.iter().cloned().collect()
    }

    pub fn hardware_catalog(&self) -> HardwareCatalog {
        self.hardware.iter().cloned().collect()
    }

    /// First configured machine of a kind
    pub fn machine_of_kind(&self, kind: MachineKind) -> Option<&Machine> {
        self.machines.iter().find(|m| m.kind == kind)
    }
}
