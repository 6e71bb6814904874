//! Drawer piece generator
//!
//! Expands a drawer specification into concrete pieces. The two drawer
//! systems have closed, different topologies:
//!
//! | System   | Pieces (each × drawer count)                                    |
//! |----------|-----------------------------------------------------------------|
//! | Metal    | bottom, back                                                    |
//! | Melamine | left side, right side, inner front, inner back, bottom, face    |
//!
//! Edge allowances on drawer pieces are [`EdgeBand::Fixed`] at board thickness.

use cabinetkit_core::units::round_tenth;
use cabinetkit_core::{
    AxisLink, DrawerSystem, EdgeBand, EdgeSlot, EdgeSlots, MaterialId, ModuleAxis, Piece,
    PieceRole, ResizeRule,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Metal back height as a share of the drawer height
const METAL_BACK_RATIO: f64 = 0.6;
/// Melamine inner back height as a share of the inner height
const MELAMINE_BACK_RATIO: f64 = 0.7;
/// Grooved bottoms lose this much per axis to fit the routed grooves
const GROOVE_REDUCTION: f64 = 4.0;

/// Parameters for the drawer piece generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerConfig {
    pub module_width: f64,
    pub module_height: f64,
    pub module_depth: f64,
    pub drawer_count: u32,
    /// Clearance per side between box and carcass
    pub slide_clearance: f64,
    /// Clearance between box and back panel
    pub backend_clearance: f64,
    pub material_thickness: f64,
    pub system: DrawerSystem,
    #[serde(default)]
    pub material: Option<MaterialId>,
}

/// Shared drawer frame derived from the module
#[derive(Debug, Clone, Copy)]
struct DrawerFrame {
    width: f64,
    depth: f64,
    height: f64,
    thickness: f64,
    count: u32,
    /// Share of the module height each drawer occupies
    height_factor: f64,
}

impl DrawerFrame {
    fn from_config(config: &DrawerConfig) -> Self {
        let count = config.drawer_count.max(1);
        Self {
            width: config.module_width - 2.0 * config.slide_clearance,
            depth: config.module_depth - config.backend_clearance,
            height: config.module_height / f64::from(count),
            thickness: config.material_thickness,
            count: config.drawer_count,
            height_factor: 1.0 / f64::from(count),
        }
    }

    fn inner_height(&self) -> f64 {
        self.height - self.thickness
    }
}

/// Generator for drawer pieces
pub struct DrawerPieceGenerator;

impl DrawerPieceGenerator {
    /// Generate all drawer pieces; an empty list when `drawer_count` is 0
    pub fn generate(config: &DrawerConfig) -> Vec<Piece> {
        if config.drawer_count == 0 {
            return Vec::new();
        }

        let frame = DrawerFrame::from_config(config);
        let pieces: Vec<Piece> = match config.system {
            DrawerSystem::Metal => metal_pieces(&frame),
            DrawerSystem::Melamine { grooved_bottom } => melamine_pieces(config, &frame, grooved_bottom),
        }
        .into_iter()
        .map(|piece| {
            piece
                .with_quantity(frame.count)
                .with_material(config.material.clone())
        })
        .collect();

        debug!(
            system = ?config.system,
            drawers = frame.count,
            pieces = pieces.len(),
            "Generated drawer pieces"
        );
        pieces
    }
}

fn follows(axis: ModuleAxis, factor: f64) -> Option<AxisLink> {
    Some(AxisLink::new(axis, factor))
}

fn metal_pieces(frame: &DrawerFrame) -> Vec<Piece> {
    let t = EdgeBand::fixed(frame.thickness);

    let bottom = Piece::new(
        "drawer-bottom",
        "Drawer bottom",
        PieceRole::DrawerBottom,
        round_tenth(frame.width),
        round_tenth(frame.depth),
    )
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Depth, 1.0),
    ));

    let back = Piece::new(
        "drawer-back",
        "Drawer back",
        PieceRole::DrawerBack,
        round_tenth(frame.width),
        round_tenth(frame.height * METAL_BACK_RATIO),
    )
    .with_edges(EdgeSlots {
        l1: None,
        l2: Some(t.clone()),
        a1: Some(t.clone()),
        a2: Some(t),
    })
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Height, METAL_BACK_RATIO * frame.height_factor),
    ));

    vec![bottom, back]
}

fn melamine_pieces(config: &DrawerConfig, frame: &DrawerFrame, grooved_bottom: bool) -> Vec<Piece> {
    let t = EdgeBand::fixed(frame.thickness);
    let inner_height = frame.inner_height();
    let inner_width = frame.width - 2.0 * frame.thickness;
    let hf = frame.height_factor;

    let side_rule = ResizeRule::new(
        follows(ModuleAxis::Depth, 1.0),
        follows(ModuleAxis::Height, hf),
    );
    let left_side = Piece::new(
        "drawer-side-left",
        "Drawer side left",
        PieceRole::DrawerSide,
        round_tenth(frame.depth),
        round_tenth(inner_height),
    )
    .with_edge(EdgeSlot::L2, Some(t.clone()))
    .with_edge(EdgeSlot::A2, Some(t.clone()))
    .with_resize(side_rule);

    let right_side = Piece::new(
        "drawer-side-right",
        "Drawer side right",
        PieceRole::DrawerSide,
        round_tenth(frame.depth),
        round_tenth(inner_height),
    )
    .with_edge(EdgeSlot::L2, Some(t.clone()))
    .with_edge(EdgeSlot::A1, Some(t.clone()))
    .with_resize(side_rule);

    let inner_front = Piece::new(
        "drawer-front",
        "Drawer inner front",
        PieceRole::DrawerFront,
        round_tenth(inner_width),
        round_tenth(inner_height),
    )
    .with_edge(EdgeSlot::L2, Some(t.clone()))
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Height, hf),
    ));

    let inner_back = Piece::new(
        "drawer-back",
        "Drawer inner back",
        PieceRole::DrawerBack,
        round_tenth(inner_width),
        round_tenth(inner_height * MELAMINE_BACK_RATIO),
    )
    .with_edge(EdgeSlot::L2, Some(t.clone()))
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Height, MELAMINE_BACK_RATIO * hf),
    ));

    let (bottom_width, bottom_depth) = if grooved_bottom {
        (frame.width - GROOVE_REDUCTION, frame.depth - GROOVE_REDUCTION)
    } else {
        (frame.width, frame.depth)
    };
    let bottom = Piece::new(
        "drawer-bottom",
        "Drawer bottom",
        PieceRole::DrawerBottom,
        round_tenth(bottom_width),
        round_tenth(bottom_depth),
    )
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Depth, 1.0),
    ));

    let face = Piece::new(
        "drawer-face",
        "Drawer face",
        PieceRole::DrawerFace,
        round_tenth(config.module_width),
        round_tenth(frame.height),
    )
    .with_edges(EdgeSlots::all(t))
    .with_grain_locked(true)
    .with_resize(ResizeRule::new(
        follows(ModuleAxis::Width, 1.0),
        follows(ModuleAxis::Height, hf),
    ));

    vec![left_side, right_side, inner_front, inner_back, bottom, face]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(system: DrawerSystem, drawer_count: u32) -> DrawerConfig {
        DrawerConfig {
            module_width: 600.0,
            module_height: 720.0,
            module_depth: 560.0,
            drawer_count,
            slide_clearance: 13.0,
            backend_clearance: 20.0,
            material_thickness: 18.0,
            system,
            material: None,
        }
    }

    #[test]
    fn test_single_metal_drawer() {
        let config = DrawerConfig {
            module_width: 600.0,
            module_height: 150.0,
            module_depth: 560.0,
            drawer_count: 1,
            slide_clearance: 10.0,
            backend_clearance: 20.0,
            material_thickness: 18.0,
            system: DrawerSystem::Metal,
            material: None,
        };
        let pieces = DrawerPieceGenerator::generate(&config);
        assert_eq!(pieces.len(), 2);

        let bottom = &pieces[0];
        assert_eq!(bottom.role, PieceRole::DrawerBottom);
        assert_eq!((bottom.final_width, bottom.final_height), (580.0, 540.0));
        assert!(bottom.edges.is_empty());

        let back = &pieces[1];
        assert_eq!((back.final_width, back.final_height), (580.0, 90.0));
        assert!(back.edges.l1.is_none());
        for band in [&back.edges.l2, &back.edges.a1, &back.edges.a2] {
            assert_eq!(band, &Some(EdgeBand::fixed(18.0)));
        }
    }

    #[test]
    fn test_zero_drawers_yield_nothing() {
        assert!(DrawerPieceGenerator::generate(&config(DrawerSystem::Metal, 0)).is_empty());
    }

    #[test]
    fn test_melamine_dimensions() {
        let pieces = DrawerPieceGenerator::generate(&config(
            DrawerSystem::Melamine {
                grooved_bottom: false,
            },
            3,
        ));
        assert_eq!(pieces.len(), 6);
        assert!(pieces.iter().all(|p| p.quantity == 3));

        // drawer 574 x 540 x 240, inner height 222
        let side = &pieces[0];
        assert_eq!((side.final_width, side.final_height), (540.0, 222.0));
        assert!(side.edges.l2.is_some() && side.edges.a2.is_some());
        assert!(side.edges.a1.is_none());
        assert!(pieces[1].edges.a1.is_some() && pieces[1].edges.a2.is_none());

        let inner_front = &pieces[2];
        assert_eq!((inner_front.final_width, inner_front.final_height), (538.0, 222.0));

        let inner_back = &pieces[3];
        assert_eq!(inner_back.final_height, 155.4);

        let bottom = &pieces[4];
        assert_eq!((bottom.final_width, bottom.final_height), (574.0, 540.0));
        assert!(bottom.edges.is_empty());

        let face = &pieces[5];
        assert_eq!((face.final_width, face.final_height), (600.0, 240.0));
        assert_eq!(face.edges.occupied().count(), 4);
    }

    #[test]
    fn test_grooved_bottom_reduction() {
        let pieces = DrawerPieceGenerator::generate(&config(
            DrawerSystem::Melamine {
                grooved_bottom: true,
            },
            1,
        ));
        let bottom = pieces.iter().find(|p| p.role == PieceRole::DrawerBottom).unwrap();
        assert_eq!((bottom.final_width, bottom.final_height), (570.0, 536.0));
        assert!(bottom.edges.is_empty());
    }
}
