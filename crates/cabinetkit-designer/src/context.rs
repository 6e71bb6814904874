//! Construction defaults resolved against the material catalog
//!
//! Resolution happens once per recompute so that generators work with a
//! known board thickness and typed edge bands instead of raw ids.

use crate::error::{DesignError, DesignResult};
use cabinetkit_core::{
    ConstructionDefaults, EdgeBand, FactoryConfig, Material, MaterialId, MaterialKind,
    MaterialLibrary,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionContext {
    /// Carcass board
    pub board: MaterialId,
    /// Carcass board thickness in mm
    pub thickness: f64,
    /// Band applied to visible edges
    pub edge: Option<EdgeBand>,
    /// Back panel board
    pub back: MaterialId,
    pub slide_clearance: f64,
    pub backend_clearance: f64,
    pub door_gap: f64,
    pub stretcher_depth: f64,
}

impl ConstructionContext {
    /// Resolve defaults, checking that every referenced material exists with the right kind
    pub fn resolve(
        defaults: &ConstructionDefaults,
        materials: &MaterialLibrary,
    ) -> DesignResult<Self> {
        let board = expect_kind(materials, &defaults.board_material, MaterialKind::Board)?;
        let edge = defaults
            .edge_material
            .as_ref()
            .map(|id| expect_kind(materials, id, MaterialKind::Edge))
            .transpose()?
            .map(|m| EdgeBand::Material(m.id.clone()));
        let back = match &defaults.back_material {
            Some(id) => expect_kind(materials, id, MaterialKind::Board)?.id.clone(),
            None => board.id.clone(),
        };

        Ok(Self {
            board: board.id.clone(),
            thickness: board.thickness,
            edge,
            back,
            slide_clearance: defaults.slide_clearance,
            backend_clearance: defaults.backend_clearance,
            door_gap: defaults.door_gap,
            stretcher_depth: defaults.stretcher_depth,
        })
    }

    pub fn from_factory(factory: &FactoryConfig) -> DesignResult<Self> {
        Self::resolve(&factory.construction, &factory.material_library())
    }
}

fn expect_kind<'a>(
    materials: &'a MaterialLibrary,
    id: &MaterialId,
    expected: MaterialKind,
) -> DesignResult<&'a Material> {
    let material = materials
        .get_material(id)
        .ok_or_else(|| DesignError::MaterialNotFound(id.clone()))?;
    if material.kind != expected {
        return Err(DesignError::WrongMaterialKind {
            id: id.clone(),
            expected,
            actual: material.kind,
        });
    }
    Ok(material)
}
