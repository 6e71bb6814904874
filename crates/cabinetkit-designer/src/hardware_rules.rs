//! Hardware rule engine
//!
//! Pure rule tables mapping module geometry to leg, hinge and slide
//! quantities. The hinge table here is the assembly rule used for the BOM;
//! costing keeps its own bracket table.

use cabinetkit_core::{
    HardwareAssignment, HingeRule, LegRule, ModuleSpec, Piece, PieceRole, SlideRule, Zone,
};

/// Base units wider than this stand on three pairs of legs
pub const WIDE_BASE_THRESHOLD: f64 = 800.0;

/// Leg quantity for a module; `None` for zones that do not stand on legs
pub fn legs(module_width: f64, zone: Zone) -> Option<LegRule> {
    if zone != Zone::Base {
        return None;
    }
    let rule = if module_width > WIDE_BASE_THRESHOLD {
        LegRule {
            quantity: 6,
            reason: format!("Width {} mm > {} mm: 3 pairs", module_width, WIDE_BASE_THRESHOLD),
        }
    } else {
        LegRule {
            quantity: 4,
            reason: format!("Width {} mm <= {} mm: 2 pairs", module_width, WIDE_BASE_THRESHOLD),
        }
    };
    Some(rule)
}

/// Hinges per door by door height
pub fn hinges_per_door(door_height: f64) -> u32 {
    if door_height <= 500.0 {
        2
    } else if door_height <= 1200.0 {
        3
    } else {
        4
    }
}

pub fn hinges(door_height: f64, door_count: u32) -> HingeRule {
    let per_door = hinges_per_door(door_height);
    HingeRule {
        per_door,
        total: per_door * door_count,
        reason: format!(
            "Door height {} mm: {} per door x {} doors",
            door_height, per_door, door_count
        ),
    }
}

/// One slide pair per drawer
pub fn slides(drawer_count: u32) -> SlideRule {
    SlideRule {
        pairs: drawer_count,
    }
}

/// Assemble the hardware assignment of a module.
///
/// The door height is taken from the first door piece; modules without one
/// fall back to their own height.
pub fn assign(module: &ModuleSpec, pieces: &[Piece]) -> HardwareAssignment {
    let door_height = pieces
        .iter()
        .find(|p| matches!(p.role, PieceRole::Door { .. }))
        .map(|p| p.final_height)
        .unwrap_or(module.height);

    HardwareAssignment {
        legs: legs(module.width, module.zone),
        hinges: hinges(door_height, module.door_count),
        slides: slides(module.drawer_count),
    }
}
