use cabinetkit_core::{
    ConstructionDefaults, EdgeBand, EdgeSlot, FactoryConfig, GlobalConfig, Material, MaterialKind,
    ModuleSpec, PieceRole, Zone,
};
use cabinetkit_designer::{
    apply_module_edit, apply_piece_command, cutlist_csv_string, recompute, Bom,
    ConstructionContext, ModuleEdit, PieceCommand, PieceSelector,
};

fn factory() -> FactoryConfig {
    let mut construction = ConstructionDefaults::new("MEL18");
    construction.edge_material = Some("PVC2".into());
    construction.back_material = Some("HDF3".into());
    FactoryConfig {
        materials: vec![
            Material::new("MEL18", "Melamine 18", MaterialKind::Board, 18.0, 32.0),
            Material::new("HDF3", "HDF 3", MaterialKind::Board, 3.0, 7.0),
            Material::new("PVC2", "PVC 2", MaterialKind::Edge, 2.0, 0.9),
        ],
        hardware: Vec::new(),
        machines: Vec::new(),
        global: GlobalConfig::default(),
        construction,
    }
}

#[test]
fn override_survives_resize_and_dies_on_door_change() {
    let factory = factory();
    let ctx = ConstructionContext::from_factory(&factory).unwrap();
    let materials = factory.material_library();
    let module = ModuleSpec::new("m1", Zone::Base, 600.0, 720.0, 560.0).with_doors(1, None);

    let edited = apply_piece_command(
        &module,
        &PieceCommand::SetEdge {
            target: PieceSelector::Role(PieceRole::Floor),
            slot: EdgeSlot::L2,
            band: Some(EdgeBand::Material("PVC2".into())),
        },
        &ctx,
    )
    .unwrap();

    let resized = apply_module_edit(
        &edited,
        &ModuleEdit::Resize {
            width: Some(700.0),
            height: None,
            depth: None,
        },
    )
    .unwrap();
    assert!(!resized.overrides_invalidated);

    let result = recompute(&resized.module, &ctx, &materials).unwrap();
    assert!(result.from_override);
    let floor = result.pieces.iter().find(|p| p.role == PieceRole::Floor).unwrap();
    assert_eq!(floor.final_width, 664.0);
    assert!(floor.edges.l2.is_some());
    let door = result.pieces.iter().find(|p| p.id.0 == "door").unwrap();
    assert_eq!(door.final_width, 697.0);

    let changed = apply_module_edit(&resized.module, &ModuleEdit::SetDoorCount(2)).unwrap();
    assert!(changed.overrides_invalidated);
    let regenerated = recompute(&changed.module, &ctx, &materials).unwrap();
    assert!(!regenerated.from_override);
    assert!(regenerated.pieces.iter().any(|p| p.id.0 == "door-right"));
    let floor = regenerated.pieces.iter().find(|p| p.role == PieceRole::Floor).unwrap();
    assert!(floor.edges.l2.is_none());
}

#[test]
fn cutlist_and_bom_agree_on_pieces() {
    let factory = factory();
    let ctx = ConstructionContext::from_factory(&factory).unwrap();
    let materials = factory.material_library();
    let module = ModuleSpec::new("w1", Zone::Wall, 600.0, 400.0, 320.0).with_doors(1, None);
    let result = recompute(&module, &ctx, &materials).unwrap();

    let csv = cutlist_csv_string(&result.pieces, &materials, &ctx.board).unwrap();
    let copies: u32 = result.pieces.iter().map(|p| p.quantity).sum();
    assert_eq!(csv.lines().count() as u32, copies + 1);
    // door: 597 x 397 finished, banded all round with 2 mm
    assert!(csv.contains("393.0,593.0,1,Door,Melamine 18,true,true"));

    let bom = Bom::from_pieces(&result.pieces, &materials, &ctx.board);
    let copies_in_bom: u32 = bom.boards.iter().map(|l| l.pieces).sum();
    assert_eq!(copies_in_bom, copies);
    assert!(bom.total_edge_m() > 0.0);
}
