use cabinetkit_core::data::*;

const FACTORY_JSON: &str = r#"{
  "materials": [
    {"id": "MEL18", "name": "White melamine 18", "kind": "board", "thickness": 18.0, "unit_cost": 32.5, "category": "melamine"},
    {"id": "HDF3", "name": "HDF 3", "kind": "board", "thickness": 3.0, "unit_cost": 7.0},
    {"id": "PVC2", "name": "PVC 2mm", "kind": "edge", "thickness": 2.0, "unit_cost": 0.9},
    {"id": "PVC04", "name": "PVC 0.4mm", "kind": "edge", "thickness": 0.4, "unit_cost": 0.3}
  ],
  "hardware": [
    {"id": "H-110", "name": "Clip hinge 110", "unit_price": 2.4,
     "kind": {"type": "hinge", "cup": {"diameter": 35.0, "depth": 13.0},
              "pilot": {"diameter": 2.0, "depth": 10.0}, "pilot_spacing": 17.5,
              "edge_offset": 22.5, "margin_lower": 100.0, "margin_upper": 100.0}},
    {"id": "S-450", "name": "Ball slide 450", "unit_price": 6.0,
     "kind": {"type": "slide", "length": 450.0}},
    {"id": "SCREW-4x16", "name": "Screw 4x16", "unit_price": 0.03, "kind": {"type": "screw"}}
  ],
  "machines": [
    {"id": "saw", "name": "Panel saw", "kind": "cutting", "processing_speed": 15.0,
     "power_kw": 5.5, "operation_cost_per_hour": 2.5}
  ],
  "global": {"energy_price_per_kwh": 0.28, "profit_margin": 40.0},
  "construction": {"board_material": "MEL18", "edge_material": "PVC2",
                   "back_material": "HDF3", "slide_clearance": 13.0,
                   "backend_clearance": 20.0, "door_gap": 3.0, "stretcher_depth": 100.0}
}"#;

#[test]
fn test_factory_config_from_json() {
    let factory: FactoryConfig = serde_json::from_str(FACTORY_JSON).unwrap();

    let library = factory.material_library();
    assert_eq!(library.len(), 4);
    assert_eq!(library.get_materials_by_kind(MaterialKind::Edge).len(), 2);
    assert_eq!(library.edge_thickness(&"PVC04".into()), Some(0.4));

    let catalog = factory.hardware_catalog();
    let hinge = catalog.hinge_profile(&"H-110".into()).unwrap();
    assert_eq!(hinge.cup.depth, 13.0);
    assert_eq!(hinge.edge_offset, 22.5);

    assert!(factory.machine_of_kind(MachineKind::Cutting).is_some());
    assert!(factory.machine_of_kind(MachineKind::EdgeBanding).is_none());
    assert_eq!(factory.global.consumables, ConsumablesRates::default());
}

#[test]
fn test_search_by_name_is_case_insensitive() {
    let factory: FactoryConfig = serde_json::from_str(FACTORY_JSON).unwrap();
    let library = factory.material_library();
    let found = library.search_by_name("pvc");
    assert_eq!(found.len(), 2);
}

#[test]
fn test_module_with_custom_pieces_roundtrips() {
    let piece = Piece::new("floor", "Floor", PieceRole::Floor, 564.0, 560.0)
        .with_edge(EdgeSlot::L2, Some(EdgeBand::Material("PVC2".into())))
        .with_resize(ResizeRule::new(
            Some(AxisLink::follows(ModuleAxis::Width)),
            Some(AxisLink::follows(ModuleAxis::Depth)),
        ));
    let mut module = ModuleSpec::new("m1", Zone::Base, 600.0, 720.0, 560.0);
    module.custom_pieces = Some(vec![piece]);

    let json = serde_json::to_string(&module).unwrap();
    let back: ModuleSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back, module);
}
