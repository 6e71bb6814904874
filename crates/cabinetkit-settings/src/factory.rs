//! Factory catalog files
//!
//! A [`FactoryConfig`] is loaded from `.json` or `.toml` by extension and
//! validated before use; saving validates first as well.

use crate::error::{SettingsError, SettingsResult};
use crate::format::{read_file, write_file};
use cabinetkit_core::{
    DrillProfile, FactoryConfig, HardwareKind, MaterialId, MaterialKind, MaterialLibrary,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Application directory under the platform config dir
pub const APP_DIR: &str = "cabinetkit";
/// Default factory catalog file name
pub const FACTORY_FILE: &str = "factory.toml";

/// Default location of the factory catalog
pub fn default_factory_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FACTORY_FILE))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}

/// Load and validate a factory catalog
pub fn load_factory(path: &Path) -> SettingsResult<FactoryConfig> {
    let factory: FactoryConfig = read_file(path)?;
    validate_factory(&factory)?;
    info!(
        path = %path.display(),
        materials = factory.materials.len(),
        hardware = factory.hardware.len(),
        machines = factory.machines.len(),
        "Loaded factory catalog"
    );
    Ok(factory)
}

/// Validate and save a factory catalog
pub fn save_factory(factory: &FactoryConfig, path: &Path) -> SettingsResult<()> {
    validate_factory(factory)?;
    write_file(path, factory)
}

fn non_negative(key: impl Into<String>, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, format!("must be >= 0, got {}", value)))
    }
}

fn drill(key: &str, profile: &DrillProfile) -> SettingsResult<()> {
    if !(profile.diameter.is_finite() && profile.diameter > 0.0) {
        return Err(SettingsError::invalid(
            format!("{}.diameter", key),
            format!("must be > 0, got {}", profile.diameter),
        ));
    }
    if !(profile.depth.is_finite() && profile.depth > 0.0) {
        return Err(SettingsError::invalid(
            format!("{}.depth", key),
            format!("must be > 0, got {}", profile.depth),
        ));
    }
    Ok(())
}

fn unique<'a>(section: &str, ids: impl Iterator<Item = &'a str>) -> SettingsResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SettingsError::invalid(
                section,
                format!("duplicate id '{}'", id),
            ));
        }
    }
    Ok(())
}

fn expect_kind(
    library: &MaterialLibrary,
    key: &str,
    id: &MaterialId,
    kind: MaterialKind,
) -> SettingsResult<()> {
    match library.get_material(id) {
        Some(material) if material.kind == kind => Ok(()),
        Some(material) => Err(SettingsError::invalid(
            key,
            format!("'{}' is {}, expected {}", id, material.kind, kind),
        )),
        None => Err(SettingsError::invalid(key, format!("unknown material '{}'", id))),
    }
}

/// Validate a factory catalog
pub fn validate_factory(factory: &FactoryConfig) -> SettingsResult<()> {
    unique("materials", factory.materials.iter().map(|m| m.id.0.as_str()))?;
    unique("hardware", factory.hardware.iter().map(|h| h.id.0.as_str()))?;
    unique("machines", factory.machines.iter().map(|m| m.id.as_str()))?;

    for material in &factory.materials {
        non_negative(format!("materials.{}.thickness", material.id), material.thickness)?;
        non_negative(format!("materials.{}.unit_cost", material.id), material.unit_cost)?;
    }

    for item in &factory.hardware {
        let key = format!("hardware.{}", item.id);
        non_negative(format!("{}.unit_price", key), item.unit_price)?;
        match &item.kind {
            HardwareKind::Hinge(hinge) => {
                drill(&format!("{}.cup", key), &hinge.cup)?;
                drill(&format!("{}.pilot", key), &hinge.pilot)?;
            }
            HardwareKind::Minifix(minifix) => {
                drill(&format!("{}.cam", key), &minifix.cam)?;
                drill(&format!("{}.bolt", key), &minifix.bolt)?;
                drill(&format!("{}.pin", key), &minifix.pin)?;
            }
            HardwareKind::ShelfPin(pins) => {
                drill(&format!("{}.hole", key), &pins.hole)?;
                if !(pins.pitch.is_finite() && pins.pitch > 0.0) {
                    return Err(SettingsError::invalid(
                        format!("{}.pitch", key),
                        format!("must be > 0, got {}", pins.pitch),
                    ));
                }
            }
            HardwareKind::Slide(_) | HardwareKind::Leg(_) | HardwareKind::Screw => {}
        }
    }

    for machine in &factory.machines {
        let key = format!("machines.{}", machine.id);
        non_negative(format!("{}.processing_speed", key), machine.processing_speed)?;
        non_negative(format!("{}.power_kw", key), machine.power_kw)?;
        non_negative(
            format!("{}.operation_cost_per_hour", key),
            machine.operation_cost_per_hour,
        )?;
    }

    let global = &factory.global;
    if !(global.profit_margin.is_finite() && (0.0..100.0).contains(&global.profit_margin)) {
        return Err(SettingsError::invalid(
            "global.profit_margin",
            format!("must be in [0, 100), got {}", global.profit_margin),
        ));
    }
    non_negative("global.energy_price_per_kwh", global.energy_price_per_kwh)?;
    non_negative("global.consumables.glue_per_module", global.consumables.glue_per_module)?;
    non_negative("global.consumables.screw_unit_price", global.consumables.screw_unit_price)?;

    let library = factory.material_library();
    let construction = &factory.construction;
    expect_kind(
        &library,
        "construction.board_material",
        &construction.board_material,
        MaterialKind::Board,
    )?;
    if let Some(edge) = &construction.edge_material {
        expect_kind(&library, "construction.edge_material", edge, MaterialKind::Edge)?;
    }
    if let Some(back) = &construction.back_material {
        expect_kind(&library, "construction.back_material", back, MaterialKind::Board)?;
    }
    for (key, value) in [
        ("construction.slide_clearance", construction.slide_clearance),
        ("construction.backend_clearance", construction.backend_clearance),
        ("construction.door_gap", construction.door_gap),
        ("construction.stretcher_depth", construction.stretcher_depth),
    ] {
        non_negative(key, value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{
        ConstructionDefaults, GlobalConfig, HardwareItem, HingeProfile, Machine, MachineKind,
        Material,
    };

    fn factory() -> FactoryConfig {
        let mut construction = ConstructionDefaults::new("MEL18");
        construction.edge_material = Some("PVC2".into());
        FactoryConfig {
            materials: vec![
                Material::new("MEL18", "Melamine 18", MaterialKind::Board, 18.0, 32.0),
                Material::new("PVC2", "PVC 2", MaterialKind::Edge, 2.0, 0.9),
            ],
            hardware: vec![HardwareItem::new(
                "H-110",
                "Clip hinge",
                2.4,
                HardwareKind::Hinge(HingeProfile::standard(13.0, 10.0)),
            )],
            machines: vec![
                Machine::new("SAW1", "Panel saw", MachineKind::Cutting).with_rates(15.0, 5.5, 2.5),
            ],
            global: GlobalConfig::default(),
            construction,
        }
    }

    #[test]
    fn test_valid_factory() {
        assert!(validate_factory(&factory()).is_ok());
    }

    #[test]
    fn test_margin_range() {
        let mut f = factory();
        f.global.profit_margin = 100.0;
        assert!(validate_factory(&f).is_err());
        f.global.profit_margin = 0.0;
        assert!(validate_factory(&f).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut f = factory();
        f.materials.push(Material::new("PVC2", "Other", MaterialKind::Edge, 1.0, 0.5));
        let err = validate_factory(&f).unwrap_err();
        assert!(err.to_string().contains("duplicate id 'PVC2'"));
    }

    #[test]
    fn test_construction_kinds() {
        let mut f = factory();
        f.construction.edge_material = Some("MEL18".into());
        assert!(validate_factory(&f).is_err());

        let mut f = factory();
        f.construction.board_material = "MISSING".into();
        assert!(validate_factory(&f).is_err());
    }

    #[test]
    fn test_zero_drill_depth_rejected() {
        let mut f = factory();
        f.hardware[0].kind = HardwareKind::Hinge(HingeProfile::standard(0.0, 10.0));
        let err = validate_factory(&f).unwrap_err();
        assert!(err.to_string().contains("cup.depth"));
    }
}
