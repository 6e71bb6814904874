//! Module edits
//!
//! Edits are values applied to a [`ModuleSpec`], producing a new spec. An
//! edit that changes the module's apertures or topology clears any manual
//! piece override so the next recompute regenerates from the rules; the
//! caller learns about it through [`EditOutcome::overrides_invalidated`].

use crate::error::{DesignError, DesignResult};
use cabinetkit_core::units::round_tenth;
use cabinetkit_core::{
    AxisLink, BackMounting, DrawerSystem, HardwareId, ModuleAxis, ModuleSpec, Piece, Zone,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A single edit to a module specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum ModuleEdit {
    /// Change outer dimensions; unset axes keep their value
    Resize {
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
        #[serde(default)]
        depth: Option<f64>,
    },
    SetDoorCount(u32),
    SetDrawerCount(u32),
    SetShelfCount(u32),
    SetHinge(Option<HardwareId>),
    SetSlide(Option<HardwareId>),
    SetDrawerSystem(DrawerSystem),
    SetBackMounting(BackMounting),
    SetZone(Zone),
    Rename(String),
}

impl ModuleEdit {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resize { .. } => "resize",
            Self::SetDoorCount(_) => "set door count",
            Self::SetDrawerCount(_) => "set drawer count",
            Self::SetShelfCount(_) => "set shelf count",
            Self::SetHinge(_) => "set hinge",
            Self::SetSlide(_) => "set slide",
            Self::SetDrawerSystem(_) => "set drawer system",
            Self::SetBackMounting(_) => "set back mounting",
            Self::SetZone(_) => "set zone",
            Self::Rename(_) => "rename",
        }
    }
}

/// Result of applying a [`ModuleEdit`]
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    pub module: ModuleSpec,
    /// The edit cleared a manual piece override
    pub overrides_invalidated: bool,
}

/// Apply an edit, returning the edited module.
///
/// Setting a field to its current value is a no-op and never invalidates.
pub fn apply_module_edit(module: &ModuleSpec, edit: &ModuleEdit) -> DesignResult<EditOutcome> {
    let mut next = module.clone();
    let changed_topology = match edit {
        ModuleEdit::Resize {
            width,
            height,
            depth,
        } => {
            resize(&mut next, *width, *height, *depth)?;
            false
        }
        ModuleEdit::SetDoorCount(count) => replace(&mut next.door_count, *count),
        ModuleEdit::SetDrawerCount(count) => replace(&mut next.drawer_count, *count),
        ModuleEdit::SetShelfCount(count) => replace(&mut next.shelf_count, *count),
        ModuleEdit::SetHinge(id) => replace(&mut next.hinge_id, id.clone()),
        ModuleEdit::SetSlide(id) => replace(&mut next.slide_id, id.clone()),
        ModuleEdit::SetDrawerSystem(system) => replace(&mut next.drawer_system, *system),
        ModuleEdit::SetBackMounting(mounting) => replace(&mut next.back_mounting, *mounting),
        ModuleEdit::SetZone(zone) => replace(&mut next.zone, *zone),
        ModuleEdit::Rename(name) => {
            next.name = name.clone();
            false
        }
    };

    let overrides_invalidated = changed_topology && next.custom_pieces.take().is_some();
    if overrides_invalidated {
        info!(
            module = %next.label(),
            edit = edit.name(),
            "Manual piece override invalidated"
        );
    } else {
        debug!(module = %next.label(), edit = edit.name(), "Module edited");
    }

    Ok(EditOutcome {
        module: next,
        overrides_invalidated,
    })
}

/// Store `value`, reporting whether it differed
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

fn resize(
    module: &mut ModuleSpec,
    width: Option<f64>,
    height: Option<f64>,
    depth: Option<f64>,
) -> DesignResult<()> {
    let target = |field: &str, value: Option<f64>, current: f64| -> DesignResult<f64> {
        match value {
            Some(v) if !v.is_finite() || v <= 0.0 => Err(DesignError::invalid_value(
                field,
                format!("must be positive, got {}", v),
            )),
            Some(v) => Ok(v),
            None => Ok(current),
        }
    };
    let new_width = target("width", width, module.width)?;
    let new_height = target("height", height, module.height)?;
    let new_depth = target("depth", depth, module.depth)?;

    let (old_width, old_height, old_depth) = (module.width, module.height, module.depth);
    let delta = |axis: ModuleAxis| match axis {
        ModuleAxis::Width => new_width - old_width,
        ModuleAxis::Height => new_height - old_height,
        ModuleAxis::Depth => new_depth - old_depth,
    };

    if let Some(pieces) = module.custom_pieces.as_mut() {
        for piece in pieces.iter_mut() {
            let width = cascade(piece, "final_width", piece.final_width, piece.resize.width, &delta)?;
            let height = cascade(
                piece,
                "final_height",
                piece.final_height,
                piece.resize.height,
                &delta,
            )?;
            piece.final_width = width;
            piece.final_height = height;
        }
    }

    module.width = new_width;
    module.height = new_height;
    module.depth = new_depth;
    Ok(())
}

fn cascade(
    piece: &Piece,
    field: &str,
    current: f64,
    link: Option<AxisLink>,
    delta: impl Fn(ModuleAxis) -> f64,
) -> DesignResult<f64> {
    let Some(link) = link else {
        return Ok(current);
    };
    let next = round_tenth(current + link.factor * delta(link.axis));
    if next <= 0.0 {
        return Err(DesignError::invalid_value(
            format!("{}.{}", piece.id, field),
            format!("resize would shrink the piece to {} mm", next),
        ));
    }
    Ok(next)
}
