//! Materials catalog
//!
//! Boards are priced per square metre, edge bands per linear metre and
//! hardware stock per unit. Only [`MaterialKind::Edge`] entries may be
//! referenced from a piece's edge slots.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Material kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Sheet stock (melamine, MDF, plywood, hardboard)
    Board,
    /// Edge banding strip (PVC, ABS, veneer)
    Edge,
    /// Stock consumed by the unit
    Hardware,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Board => write!(f, "Board"),
            Self::Edge => write!(f, "Edge"),
            Self::Hardware => write!(f, "Hardware"),
        }
    }
}

/// Material identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Complete material definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    /// Display name, also used as the cut-list "Material" column
    pub name: String,
    pub kind: MaterialKind,
    /// Thickness in mm (board thickness, or band thickness for edges)
    pub thickness: f64,
    /// Cost per m² (board), per linear m (edge) or per unit (hardware)
    pub unit_cost: f64,
    /// Free-form grouping ("melamine", "pvc", ...)
    #[serde(default)]
    pub category: String,
}

impl Material {
    /// Create a new material
    pub fn new(
        id: impl Into<MaterialId>,
        name: impl Into<String>,
        kind: MaterialKind,
        thickness: f64,
        unit_cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            thickness,
            unit_cost,
            category: String::new(),
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn is_edge(&self) -> bool {
        self.kind == MaterialKind::Edge
    }

    pub fn is_board(&self) -> bool {
        self.kind == MaterialKind::Board
    }
}

/// Materials library - manages collection of materials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialLibrary {
    /// Collection of materials by ID, ordered for deterministic reports
    materials: BTreeMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material to the library, replacing any entry with the same id
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by ID
    pub fn get_material(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Remove a material from the library
    pub fn remove_material(&mut self, id: &MaterialId) -> Option<Material> {
        self.materials.remove(id)
    }

    /// Get all materials in id order
    pub fn get_all_materials(&self) -> Vec<&Material> {
        self.materials.values().collect()
    }

    /// Get all materials of a kind
    pub fn get_materials_by_kind(&self, kind: MaterialKind) -> Vec<&Material> {
        self.materials.values().filter(|m| m.kind == kind).collect()
    }

    /// Search materials by name (partial match, case-insensitive)
    pub fn search_by_name(&self, query: &str) -> Vec<&Material> {
        let query_lower = query.to_lowercase();
        self.materials
            .values()
            .filter(|m| m.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Thickness of an edge band. `None` when the id is unknown or not an edge.
    pub fn edge_thickness(&self, id: &MaterialId) -> Option<f64> {
        self.materials
            .get(id)
            .filter(|m| m.is_edge())
            .map(|m| m.thickness)
    }

    /// Get the number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl FromIterator<Material> for MaterialLibrary {
    fn from_iter<I: IntoIterator<Item = Material>>(iter: I) -> Self {
        let mut library = Self::new();
        for material in iter {
            library.add_material(material);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_thickness_only_for_edges() {
        let library: MaterialLibrary = vec![
            Material::new("MEL18", "Melamine 18", MaterialKind::Board, 18.0, 32.0),
            Material::new("PVC2", "PVC 2mm", MaterialKind::Edge, 2.0, 0.9),
        ]
        .into_iter()
        .collect();

        assert_eq!(library.edge_thickness(&"PVC2".into()), Some(2.0));
        assert_eq!(library.edge_thickness(&"MEL18".into()), None);
        assert_eq!(library.edge_thickness(&"missing".into()), None);
    }
}
