//! Bill of materials rollup
//!
//! Board area per board material and banding metres per edge material,
//! ordered by material id.

use crate::dimensions::edge_runs;
use cabinetkit_core::units::round_to;
use cabinetkit_core::{MaterialId, MaterialLibrary, Piece};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Board consumption of one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardLine {
    pub material: MaterialId,
    pub name: String,
    /// Physical copies cut from this board
    pub pieces: u32,
    pub area_m2: f64,
}

/// Banding consumption of one edge material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLine {
    pub material: MaterialId,
    pub name: String,
    pub meters: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    pub boards: Vec<BoardLine>,
    pub edges: Vec<EdgeLine>,
}

impl Bom {
    /// Roll up finished areas and banding runs. Pieces without a material
    /// count against `default_board`.
    pub fn from_pieces(
        pieces: &[Piece],
        materials: &MaterialLibrary,
        default_board: &MaterialId,
    ) -> Self {
        let mut boards: BTreeMap<&MaterialId, (u32, f64)> = BTreeMap::new();
        let mut edges: BTreeMap<MaterialId, f64> = BTreeMap::new();

        for piece in pieces {
            let board = piece.material.as_ref().unwrap_or(default_board);
            let entry = boards.entry(board).or_insert((0, 0.0));
            entry.0 += piece.quantity;
            entry.1 += piece.area_m2();

            for run in edge_runs(piece) {
                *edges.entry(run.material).or_insert(0.0) += run.total_m;
            }
        }

        let name_of = |id: &MaterialId| {
            materials
                .get_material(id)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| id.0.clone())
        };

        Self {
            boards: boards
                .into_iter()
                .map(|(id, (count, area))| BoardLine {
                    material: id.clone(),
                    name: name_of(id),
                    pieces: count,
                    area_m2: round_to(area, 3),
                })
                .collect(),
            edges: edges
                .into_iter()
                .map(|(id, meters)| EdgeLine {
                    name: name_of(&id),
                    material: id,
                    meters: round_to(meters, 2),
                })
                .collect(),
        }
    }

    pub fn total_area_m2(&self) -> f64 {
        round_to(self.boards.iter().map(|l| l.area_m2).sum(), 3)
    }

    pub fn total_edge_m(&self) -> f64 {
        round_to(self.edges.iter().map(|l| l.meters).sum(), 2)
    }
}
