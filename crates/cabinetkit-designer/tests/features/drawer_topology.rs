use cabinetkit_core::{DrawerSystem, PieceRole};
use cabinetkit_designer::{DrawerConfig, DrawerPieceGenerator};
use proptest::prelude::*;
use std::collections::HashSet;

fn config(system: DrawerSystem, drawer_count: u32) -> DrawerConfig {
    DrawerConfig {
        module_width: 900.0,
        module_height: 800.0,
        module_depth: 580.0,
        drawer_count,
        slide_clearance: 13.0,
        backend_clearance: 20.0,
        material_thickness: 18.0,
        system,
        material: Some("MEL18".into()),
    }
}

proptest! {
    #[test]
    fn melamine_always_six_types(count in 1u32..6, grooved in any::<bool>()) {
        let pieces = DrawerPieceGenerator::generate(&config(
            DrawerSystem::Melamine { grooved_bottom: grooved },
            count,
        ));
        prop_assert_eq!(pieces.len(), 6);
        let ids: HashSet<_> = pieces.iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids.len(), 6);
        prop_assert!(pieces.iter().all(|p| p.quantity == count));
    }

    #[test]
    fn metal_always_two_types(count in 1u32..6) {
        let pieces = DrawerPieceGenerator::generate(&config(DrawerSystem::Metal, count));
        prop_assert_eq!(pieces.len(), 2);
        prop_assert!(pieces.iter().all(|p| p.quantity == count && p.role.is_drawer()));
    }
}

#[test]
fn drawer_pieces_keep_board_material() {
    let pieces = DrawerPieceGenerator::generate(&config(DrawerSystem::Metal, 2));
    assert!(pieces.iter().all(|p| p.material == Some("MEL18".into())));
    assert!(pieces.iter().any(|p| p.role == PieceRole::DrawerBack));
}
