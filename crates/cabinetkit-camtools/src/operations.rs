//! Machining operation model and bounds validation
//!
//! Coordinates are piece-local: origin at the bottom-left corner of the
//! face being drilled, +x along its length, +y along its height. For the
//! front face that is the piece's width and height; an edge face spans the
//! edge length by the board thickness.

use crate::error::{MachiningError, MachiningResult};
use cabinetkit_core::units::format_mm;
use cabinetkit_core::{EdgeSlot, PieceAxis, PieceId};
use serde::{Deserialize, Serialize};

/// Tolerance for coordinates landing exactly on a bound
const BOUNDS_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Drill,
    Pocket,
    Route,
}

/// Face an operation is machined on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    /// Main face of the panel
    Front,
    /// Narrow face under an edge slot
    Edge(EdgeSlot),
}

/// Hardware feature an operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    HingeCup,
    HingePilot,
    MinifixCam,
    MinifixBolt,
    MinifixPin,
    ShelfPin,
}

impl Feature {
    /// Tool layer prefix: pilots are guide holes, everything else is drilled
    fn layer_prefix(&self) -> &'static str {
        match self {
            Self::HingePilot => "GUIDE",
            _ => "DRILL",
        }
    }
}

/// Layer name for a tool, e.g. `DRILL_35MM` or `GUIDE_2MM`
pub fn layer_name(feature: Feature, diameter: f64) -> String {
    format!("{}_{}MM", feature.layer_prefix(), format_mm(diameter))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachiningOperation {
    pub kind: OperationKind,
    pub diameter: f64,
    /// Drilling depth (z) in mm
    pub depth: f64,
    pub x: f64,
    pub y: f64,
    pub face: Face,
    /// Tool layer
    pub layer: String,
    pub description: String,
    pub feature: Feature,
}

impl MachiningOperation {
    pub fn drill(
        feature: Feature,
        face: Face,
        x: f64,
        y: f64,
        diameter: f64,
        depth: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: OperationKind::Drill,
            diameter,
            depth,
            x,
            y,
            face,
            layer: layer_name(feature, diameter),
            description: description.into(),
            feature,
        }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.face, Face::Edge(_))
    }
}

/// Outline of the piece being machined
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceGeometry {
    pub id: PieceId,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

impl PieceGeometry {
    pub fn new(id: impl Into<PieceId>, width: f64, height: f64, thickness: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            thickness,
        }
    }

    /// Extent of a face as (length, height)
    pub fn face_extent(&self, face: Face) -> (f64, f64) {
        match face {
            Face::Front => (self.width, self.height),
            Face::Edge(slot) => {
                let length = match slot.runs_along() {
                    PieceAxis::Width => self.width,
                    PieceAxis::Height => self.height,
                };
                (length, self.thickness)
            }
        }
    }

    pub(crate) fn check(&self) -> MachiningResult<()> {
        let dims = [self.width, self.height, self.thickness];
        if dims.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(MachiningError::InvalidSpec(format!(
                "piece '{}' has a degenerate outline {} x {} x {}",
                self.id, self.width, self.height, self.thickness
            )))
        }
    }
}

/// Check a hole against the bounds of a `width` x `height` face
pub fn check_bounds(
    piece_id: &PieceId,
    op: &MachiningOperation,
    width: f64,
    height: f64,
) -> MachiningResult<()> {
    let r = op.radius();
    let inside = |v: f64, extent: f64| v >= r - BOUNDS_EPSILON && v <= extent - r + BOUNDS_EPSILON;
    if op.x.is_finite() && op.y.is_finite() && inside(op.x, width) && inside(op.y, height) {
        Ok(())
    } else {
        Err(MachiningError::OutOfBounds {
            piece_id: piece_id.0.clone(),
            operation: op.description.clone(),
            x: op.x,
            y: op.y,
            width,
            height,
        })
    }
}

/// Validate every operation against its face and the board thickness.
///
/// Fails on the first violation; nothing is clamped or dropped.
pub fn validate_operations(
    piece: &PieceGeometry,
    operations: &[MachiningOperation],
) -> MachiningResult<()> {
    piece.check()?;
    for op in operations {
        if !op.diameter.is_finite() || op.diameter <= 0.0 {
            return Err(MachiningError::InvalidSpec(format!(
                "'{}' has diameter {}",
                op.description, op.diameter
            )));
        }
        if !op.depth.is_finite() || op.depth <= 0.0 {
            return Err(MachiningError::InvalidSpec(format!(
                "'{}' has depth {}",
                op.description, op.depth
            )));
        }
        if op.face == Face::Front && op.depth >= piece.thickness {
            return Err(MachiningError::DepthExceedsThickness {
                piece_id: piece.id.0.clone(),
                operation: op.description.clone(),
                depth: op.depth,
                thickness: piece.thickness,
            });
        }
        let (width, height) = piece.face_extent(op.face);
        check_bounds(&piece.id, op, width, height)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cup(x: f64, y: f64) -> MachiningOperation {
        MachiningOperation::drill(Feature::HingeCup, Face::Front, x, y, 35.0, 13.0, "cup")
    }

    #[test]
    fn test_layer_names() {
        assert_eq!(layer_name(Feature::HingeCup, 35.0), "DRILL_35MM");
        assert_eq!(layer_name(Feature::HingePilot, 2.0), "GUIDE_2MM");
        assert_eq!(layer_name(Feature::ShelfPin, 4.5), "DRILL_4.5MM");
    }

    #[test]
    fn test_bounds_inclusive_of_radius() {
        let piece = PieceGeometry::new("door", 400.0, 700.0, 18.0);
        assert!(validate_operations(&piece, &[cup(17.5, 17.5)]).is_ok());
        assert!(validate_operations(&piece, &[cup(382.5, 682.5)]).is_ok());
        assert!(matches!(
            validate_operations(&piece, &[cup(17.4, 100.0)]),
            Err(MachiningError::OutOfBounds { .. })
        ));
        assert!(validate_operations(&piece, &[cup(100.0, 682.6)]).is_err());
    }

    #[test]
    fn test_depth_checks() {
        let piece = PieceGeometry::new("door", 400.0, 700.0, 12.0);
        assert!(matches!(
            validate_operations(&piece, &[cup(100.0, 100.0)]),
            Err(MachiningError::DepthExceedsThickness { .. })
        ));

        let mut shallow = cup(100.0, 100.0);
        shallow.depth = 0.0;
        assert!(matches!(
            validate_operations(&PieceGeometry::new("door", 400.0, 700.0, 18.0), &[shallow]),
            Err(MachiningError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_edge_face_extent() {
        let piece = PieceGeometry::new("floor", 564.0, 560.0, 18.0);
        assert_eq!(piece.face_extent(Face::Edge(EdgeSlot::A1)), (560.0, 18.0));
        assert_eq!(piece.face_extent(Face::Edge(EdgeSlot::L2)), (564.0, 18.0));

        // edge bores may run deeper than the board thickness
        let bolt = MachiningOperation::drill(
            Feature::MinifixBolt,
            Face::Edge(EdgeSlot::A1),
            50.0,
            9.0,
            8.0,
            34.0,
            "bolt",
        );
        assert!(validate_operations(&piece, &[bolt.clone()]).is_ok());
        assert!(bolt.is_edge());
    }
}
