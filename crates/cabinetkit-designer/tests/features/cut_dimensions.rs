use cabinetkit_core::{EdgeBand, EdgeSlot, MaterialId, Piece, PieceRole};
use cabinetkit_designer::DimensionResolver;
use proptest::prelude::*;
use std::collections::HashMap;

fn thicknesses() -> HashMap<MaterialId, f64> {
    HashMap::from([
        (MaterialId::from("PVC04"), 0.4),
        (MaterialId::from("PVC1"), 1.0),
        (MaterialId::from("PVC2"), 2.0),
    ])
}

fn band() -> impl Strategy<Value = Option<EdgeBand>> {
    prop_oneof![
        Just(None),
        Just(Some(EdgeBand::Material("PVC04".into()))),
        Just(Some(EdgeBand::Material("PVC1".into()))),
        Just(Some(EdgeBand::Material("PVC2".into()))),
        (0.0f64..40.0).prop_map(|t| Some(EdgeBand::fixed(t))),
    ]
}

proptest! {
    #[test]
    fn cut_sizes_never_negative(
        width in 0.0f64..3000.0,
        height in 0.0f64..3000.0,
        l1 in band(), l2 in band(), a1 in band(), a2 in band()
    ) {
        let piece = Piece::new("p", "P", PieceRole::Shelf, width, height)
            .with_edge(EdgeSlot::L1, l1)
            .with_edge(EdgeSlot::L2, l2)
            .with_edge(EdgeSlot::A1, a1)
            .with_edge(EdgeSlot::A2, a2);
        let edges = thicknesses();
        let cut = DimensionResolver::new(&edges).resolve(&piece);
        prop_assert!(cut.cut_width >= 0.0);
        prop_assert!(cut.cut_height >= 0.0);
    }

    #[test]
    fn unbanded_pieces_cut_at_final_size(width in 1u32..3000, height in 1u32..3000) {
        let piece = Piece::new("p", "P", PieceRole::Back, f64::from(width), f64::from(height));
        let edges = thicknesses();
        let cut = DimensionResolver::new(&edges).resolve(&piece);
        prop_assert_eq!(cut.cut_width, f64::from(width));
        prop_assert_eq!(cut.cut_height, f64::from(height));
    }

    #[test]
    fn height_subtracts_l_edges(height in 100u32..3000, l1 in band(), l2 in band()) {
        let piece = Piece::new("p", "P", PieceRole::Floor, 500.0, f64::from(height))
            .with_edge(EdgeSlot::L1, l1)
            .with_edge(EdgeSlot::L2, l2);
        let edges = thicknesses();
        let resolver = DimensionResolver::new(&edges);
        let discounts = resolver.discounts(&piece);
        let cut = resolver.resolve(&piece);
        let expected = f64::from(height) - discounts.height;
        prop_assert!((cut.cut_height - expected).abs() <= 0.05 + 1e-9);
        prop_assert_eq!(cut.cut_width, 500.0);
    }
}
