//! Per-module machining plan
//!
//! Dispatches on piece role: doors get hinge cups, laterals get shelf-pin
//! rows and Minifix seats, floors and ceilings get Minifix cams and bolts.

use crate::dxf_export::DxfSerializer;
use crate::error::{DxfResult, MachiningResult};
use crate::machining::{hinge_operations, minifix_horizontal, minifix_vertical, system32_rows};
use crate::operations::{MachiningOperation, PieceGeometry};
use cabinetkit_core::{
    HingeProfile, MaterialLibrary, MinifixProfile, Piece, PieceId, PieceRole, ShelfPinProfile,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hardware context for planning one module
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    pub hinge: Option<&'a HingeProfile>,
    pub hinges_per_door: u32,
    pub minifix: Option<&'a MinifixProfile>,
    pub shelf_pin: Option<&'a ShelfPinProfile>,
    pub shelf_count: u32,
    /// Thickness used when a piece's board is not in the library
    pub board_thickness: f64,
}

/// Operations planned for one piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceMachining {
    pub piece_name: String,
    pub geometry: PieceGeometry,
    pub operations: Vec<MachiningOperation>,
}

impl PieceMachining {
    pub fn piece_id(&self) -> &PieceId {
        &self.geometry.id
    }

    pub fn face_operations(&self) -> impl Iterator<Item = &MachiningOperation> {
        self.operations.iter().filter(|op| !op.is_edge())
    }

    pub fn edge_operations(&self) -> impl Iterator<Item = &MachiningOperation> {
        self.operations.iter().filter(|op| op.is_edge())
    }

    /// DXF of the front face. Edge bores stay in the report only.
    pub fn to_dxf(&self) -> DxfResult<String> {
        let face: Vec<MachiningOperation> = self.face_operations().cloned().collect();
        let skipped = self.operations.len() - face.len();
        if skipped > 0 {
            debug!(piece = %self.geometry.id, skipped, "Edge operations left out of DXF");
        }
        DxfSerializer::serialize(
            &self.geometry.id,
            &self.piece_name,
            self.geometry.width,
            self.geometry.height,
            &face,
        )
    }
}

fn thickness_of(piece: &Piece, materials: &MaterialLibrary, fallback: f64) -> f64 {
    piece
        .material
        .as_ref()
        .and_then(|id| materials.get_material(id))
        .map(|m| m.thickness)
        .filter(|t| *t > 0.0)
        .unwrap_or(fallback)
}

/// Plan the operations of every piece; pieces without operations are left out
pub fn plan_pieces(
    pieces: &[Piece],
    materials: &MaterialLibrary,
    inputs: &PlanInputs<'_>,
) -> MachiningResult<Vec<PieceMachining>> {
    let joint_heights = |lateral_height: f64| -> Vec<f64> {
        pieces
            .iter()
            .filter_map(|p| {
                let t = thickness_of(p, materials, inputs.board_thickness);
                match p.role {
                    PieceRole::Floor => Some(t / 2.0),
                    PieceRole::Ceiling => Some(lateral_height - t / 2.0),
                    _ => None,
                }
            })
            .collect()
    };

    let mut plan = Vec::new();
    for piece in pieces {
        let geometry = PieceGeometry::new(
            piece.id.clone(),
            piece.final_width,
            piece.final_height,
            thickness_of(piece, materials, inputs.board_thickness),
        );

        let mut operations = Vec::new();
        match piece.role {
            PieceRole::Door { hinge: side } => {
                if let Some(profile) = inputs.hinge {
                    operations.extend(hinge_operations(
                        &geometry,
                        profile,
                        inputs.hinges_per_door,
                        side,
                    )?);
                }
            }
            PieceRole::Lateral => {
                if let Some(profile) = inputs.shelf_pin.filter(|_| inputs.shelf_count > 0) {
                    operations.extend(system32_rows(&geometry, profile)?);
                }
                if let Some(profile) = inputs.minifix {
                    let joints = joint_heights(piece.final_height);
                    if !joints.is_empty() {
                        operations.extend(minifix_vertical(&geometry, profile, &joints)?);
                    }
                }
            }
            PieceRole::Floor | PieceRole::Ceiling => {
                if let Some(profile) = inputs.minifix {
                    operations.extend(minifix_horizontal(&geometry, profile)?);
                }
            }
            _ => {}
        }

        if !operations.is_empty() {
            plan.push(PieceMachining {
                piece_name: piece.name.clone(),
                geometry,
                operations,
            });
        }
    }
    Ok(plan)
}
