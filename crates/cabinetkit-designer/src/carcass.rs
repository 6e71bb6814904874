//! Carcass generation
//!
//! Recomputes the full piece list of a module from its parameters. The
//! output is a pure function of `(module, context)`: piece ids are local to
//! the module and stable across calls, so overrides recorded against an id
//! keep targeting the same piece after regeneration.

use crate::context::ConstructionContext;
use crate::drawers::{DrawerConfig, DrawerPieceGenerator};
use crate::error::{DesignError, DesignResult};
use cabinetkit_core::units::round_tenth;
use cabinetkit_core::{
    AxisLink, BackMounting, EdgeSlot, EdgeSlots, HingeSide, ModuleAxis, ModuleSpec, Piece,
    PieceRole, ResizeRule, Zone,
};
use tracing::debug;

/// Shelves are cut this much narrower than the inner width
const SHELF_SIDE_PLAY: f64 = 2.0;
/// Shelves stop this far from the back
const SHELF_BACK_SETBACK: f64 = 20.0;

/// Generate every piece of a module from its parameters
pub fn generate_module_pieces(
    module: &ModuleSpec,
    ctx: &ConstructionContext,
) -> DesignResult<Vec<Piece>> {
    validate_module(module, ctx)?;

    let t = ctx.thickness;
    let inner_width = module.width - 2.0 * t;
    let mut pieces = Vec::new();

    pieces.push(
        Piece::new(
            "lateral",
            "Lateral",
            PieceRole::Lateral,
            round_tenth(module.depth),
            round_tenth(module.height),
        )
        .with_quantity(2)
        .with_edge(EdgeSlot::A1, ctx.edge.clone())
        .with_grain_locked(true)
        .with_resize(ResizeRule::new(
            Some(AxisLink::follows(ModuleAxis::Depth)),
            Some(AxisLink::follows(ModuleAxis::Height)),
        )),
    );

    let horizontal_rule = ResizeRule::new(
        Some(AxisLink::follows(ModuleAxis::Width)),
        Some(AxisLink::follows(ModuleAxis::Depth)),
    );
    pieces.push(
        Piece::new(
            "floor",
            "Floor",
            PieceRole::Floor,
            round_tenth(inner_width),
            round_tenth(module.depth),
        )
        .with_edge(EdgeSlot::L1, ctx.edge.clone())
        .with_resize(horizontal_rule),
    );

    match module.zone {
        Zone::Wall | Zone::Tower => pieces.push(
            Piece::new(
                "ceiling",
                "Ceiling",
                PieceRole::Ceiling,
                round_tenth(inner_width),
                round_tenth(module.depth),
            )
            .with_edge(EdgeSlot::L1, ctx.edge.clone())
            .with_resize(horizontal_rule),
        ),
        Zone::Base => pieces.push(
            Piece::new(
                "stretcher",
                "Stretcher",
                PieceRole::Stretcher,
                round_tenth(inner_width),
                round_tenth(ctx.stretcher_depth),
            )
            .with_quantity(2)
            .with_resize(ResizeRule::new(Some(AxisLink::follows(ModuleAxis::Width)), None)),
        ),
    }

    pieces.push(back_piece(module, ctx));

    if module.shelf_count > 0 {
        pieces.push(
            Piece::new(
                "shelf",
                "Shelf",
                PieceRole::Shelf,
                round_tenth(inner_width - SHELF_SIDE_PLAY),
                round_tenth(module.depth - SHELF_BACK_SETBACK),
            )
            .with_quantity(module.shelf_count)
            .with_edge(EdgeSlot::L1, ctx.edge.clone())
            .with_resize(horizontal_rule),
        );
    }

    pieces.extend(door_pieces(module, ctx));

    for piece in pieces.iter_mut() {
        if piece.material.is_none() {
            piece.material = Some(ctx.board.clone());
        }
    }

    pieces.extend(DrawerPieceGenerator::generate(&DrawerConfig {
        module_width: module.width,
        module_height: module.height,
        module_depth: module.depth,
        drawer_count: module.drawer_count,
        slide_clearance: ctx.slide_clearance,
        backend_clearance: ctx.backend_clearance,
        material_thickness: t,
        system: module.drawer_system,
        material: Some(ctx.board.clone()),
    }));

    debug!(
        module = %module.label(),
        zone = %module.zone,
        pieces = pieces.len(),
        "Generated module pieces"
    );
    Ok(pieces)
}

fn back_piece(module: &ModuleSpec, ctx: &ConstructionContext) -> Piece {
    let t = ctx.thickness;
    let (width, height) = match module.back_mounting {
        BackMounting::Overlay => (module.width, module.height),
        BackMounting::Inset => (module.width - 2.0 * t, module.height - 2.0 * t),
    };
    Piece::new(
        "back",
        "Back",
        PieceRole::Back,
        round_tenth(width),
        round_tenth(height),
    )
    .with_material(Some(ctx.back.clone()))
    .with_resize(ResizeRule::new(
        Some(AxisLink::follows(ModuleAxis::Width)),
        Some(AxisLink::follows(ModuleAxis::Height)),
    ))
}

fn door_pieces(module: &ModuleSpec, ctx: &ConstructionContext) -> Vec<Piece> {
    let count = module.door_count;
    if count == 0 {
        return Vec::new();
    }

    let width = round_tenth(module.width / f64::from(count) - ctx.door_gap);
    let height = round_tenth(module.height - ctx.door_gap);
    let edges = ctx.edge.clone().map(EdgeSlots::all).unwrap_or_default();
    let rule = ResizeRule::new(
        Some(AxisLink::new(ModuleAxis::Width, 1.0 / f64::from(count))),
        Some(AxisLink::follows(ModuleAxis::Height)),
    );
    let door = |id: &str, name: &str, hinge: HingeSide, quantity: u32| {
        Piece::new(id, name, PieceRole::Door { hinge }, width, height)
            .with_quantity(quantity)
            .with_edges(edges.clone())
            .with_grain_locked(true)
            .with_resize(rule)
    };

    if count == 1 {
        return vec![door("door", "Door", HingeSide::Left, 1)];
    }

    let left = count.div_ceil(2);
    let right = count / 2;
    vec![
        door("door-left", "Door left", HingeSide::Left, left),
        door("door-right", "Door right", HingeSide::Right, right),
    ]
}

fn validate_module(module: &ModuleSpec, ctx: &ConstructionContext) -> DesignResult<()> {
    let invalid = |reason: String| DesignError::InvalidModule {
        module_id: module.id.clone(),
        reason,
    };

    for (axis, value) in [
        ("width", module.width),
        ("height", module.height),
        ("depth", module.depth),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(format!("{} must be positive, got {}", axis, value)));
        }
    }

    let t = ctx.thickness;
    if module.width <= 2.0 * t {
        return Err(invalid(format!(
            "width {} leaves no room between two {} mm laterals",
            module.width, t
        )));
    }
    if module.back_mounting == BackMounting::Inset && module.height <= 2.0 * t {
        return Err(invalid(format!(
            "height {} leaves no room for an inset back",
            module.height
        )));
    }
    if module.shelf_count > 0
        && (module.width - 2.0 * t <= SHELF_SIDE_PLAY || module.depth <= SHELF_BACK_SETBACK)
    {
        return Err(invalid("module too small for shelves".to_string()));
    }
    if module.door_count > 0 {
        let door_width = module.width / f64::from(module.door_count) - ctx.door_gap;
        if door_width <= 0.0 || module.height <= ctx.door_gap {
            return Err(invalid(format!(
                "{} doors do not fit a {} mm wide front",
                module.door_count, module.width
            )));
        }
    }
    if module.drawer_count > 0 {
        let drawer_width = module.width - 2.0 * ctx.slide_clearance;
        let drawer_depth = module.depth - ctx.backend_clearance;
        let drawer_height = module.height / f64::from(module.drawer_count);
        if drawer_width <= 2.0 * t || drawer_depth <= 0.0 || drawer_height <= t {
            return Err(invalid(format!(
                "{} drawers do not fit the module",
                module.drawer_count
            )));
        }
    }
    Ok(())
}
