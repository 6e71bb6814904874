use cabinetkit::core::{ModuleSpec, Piece, PieceRole, WarningKind, Zone};
use cabinetkit::settings::{load_factory, load_modules};
use cabinetkit::{FactoryConfig, Planner, QuoteReport};
use std::path::PathBuf;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

fn demo_inputs() -> (FactoryConfig, Vec<ModuleSpec>) {
    let factory = load_factory(&demo("factory.json")).unwrap();
    let modules = load_modules(&demo("modules.json")).unwrap();
    (factory, modules)
}

fn ids(pieces: &[Piece]) -> Vec<&str> {
    pieces.iter().map(|p| p.id.0.as_str()).collect()
}

#[test]
fn test_demo_plan_covers_every_module() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();
    let plan = planner.plan(&modules).unwrap();

    assert_eq!(plan.modules.len(), 3);
    assert_eq!(plan.warnings().count(), 0);

    let sink = &plan.modules[0];
    assert_eq!(sink.name, "Sink base");
    assert!(ids(&sink.pieces.pieces).contains(&"door-left"));
    assert!(ids(&sink.pieces.pieces).contains(&"stretcher"));
    assert_eq!(sink.pieces.hardware.legs.as_ref().map(|l| l.quantity), Some(4));

    let machined: Vec<&str> = sink.machining.iter().map(|m| m.piece_id().0.as_str()).collect();
    assert!(machined.contains(&"door-left"));
    assert!(machined.contains(&"door-right"));
    assert!(machined.contains(&"lateral"));
    assert!(machined.contains(&"floor"));
    assert!(!machined.contains(&"back"));
    assert!(!machined.contains(&"stretcher"));
}

#[test]
fn test_shelf_rows_only_on_modules_with_shelves() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();
    let plan = planner.plan(&modules).unwrap();

    let shelf_holes = |index: usize| {
        plan.modules[index]
            .machining
            .iter()
            .filter(|m| m.piece_id().0 == "lateral")
            .flat_map(|m| m.operations.iter())
            .filter(|op| op.diameter == 5.0 && op.depth == 12.0)
            .count()
    };
    assert_eq!(shelf_holes(0), 0);
    assert!(shelf_holes(2) > 0);
}

#[test]
fn test_dxf_documents_are_named_and_deterministic() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();

    let first = planner.dxf_documents(&planner.plan(&modules).unwrap()).unwrap();
    let second = planner.dxf_documents(&planner.plan(&modules).unwrap()).unwrap();
    assert_eq!(first, second);

    let names: Vec<&str> = first.iter().map(|d| d.file_name.as_str()).collect();
    assert!(names.contains(&"sink-base_door-left.dxf"));
    assert!(names.contains(&"wall-1_ceiling.dxf"));
    let mut unique = names.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), names.len());

    for doc in &first {
        assert!(doc.content.ends_with("  0\nEOF\n"), "{}", doc.file_name);
    }
}

#[test]
fn test_cutlist_expands_quantities() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();
    let plan = planner.plan(&modules).unwrap();

    let mut buffer = Vec::new();
    let rows = planner.write_cutlist(&plan, &mut buffer).unwrap();
    let copies: u32 = plan.pieces().iter().map(|p| p.quantity).sum();
    assert_eq!(rows, copies as usize);

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Length,Width,Qty,Label,Material,Enabled,Grain"));
    assert_eq!(lines.count(), rows);
}

#[test]
fn test_quote_applies_margin() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();
    let plan = planner.plan(&modules).unwrap();

    let breakdown = planner.quote(&plan, &modules).unwrap();
    let totals = &breakdown.totals;
    assert!(totals.total_cost > 0.0);
    assert!((totals.suggested_price * 0.6 - totals.total_cost).abs() < 0.01);
    assert_eq!(breakdown.stats.slides, 3);
    assert!(breakdown.warnings.is_empty());

    let report = QuoteReport::new(breakdown, modules.len());
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["modules"], 3);
    assert!(json["generated_at"].is_string());
    assert!(json["breakdown"]["totals"]["suggested_price"].is_number());
}

#[test]
fn test_doors_without_hinge_are_reported() {
    let (factory, _) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();
    let module = ModuleSpec::new("w", Zone::Wall, 500.0, 600.0, 320.0).with_doors(1, None);

    let plan = planner.plan_module(&module).unwrap();
    assert!(plan
        .pieces
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::MissingHardware));
    assert!(plan
        .machining
        .iter()
        .all(|m| !matches!(m.piece_id().0.as_str(), "door")));
}

#[test]
fn test_override_pieces_flow_through_plan() {
    let (factory, modules) = demo_inputs();
    let planner = Planner::new(&factory).unwrap();

    let mut module = modules[2].clone();
    let mut pieces = planner.plan_module(&module).unwrap().pieces.pieces;
    pieces.retain(|p| p.role != PieceRole::Shelf);
    module.custom_pieces = Some(pieces);

    let plan = planner.plan_module(&module).unwrap();
    assert!(plan.pieces.from_override);
    assert!(!ids(&plan.pieces.pieces).contains(&"shelf"));
}

#[test]
fn test_invalid_construction_defaults_rejected() {
    let (mut factory, _) = demo_inputs();
    factory.construction.board_material = "PVC2".into();
    let err = Planner::new(&factory).err().unwrap();
    assert!(err.is_config_error());
}
