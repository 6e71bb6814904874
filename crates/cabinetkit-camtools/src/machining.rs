//! Machining coordinate generator
//!
//! Pure functions from piece geometry plus a connector install profile to a
//! validated list of operations. Every family shares [`validate_operations`],
//! so no generator can hand out an out-of-bounds hole.

use crate::error::{MachiningError, MachiningResult};
use crate::operations::{
    validate_operations, Face, Feature, MachiningOperation, PieceGeometry,
};
use cabinetkit_core::{EdgeSlot, HingeProfile, HingeSide, MinifixProfile, ShelfPinProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Connector family to machine into a piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectorSpec {
    /// Concealed hinge cups with pilot holes along the hinge-side edge
    Hinge {
        profile: HingeProfile,
        count: u32,
        side: HingeSide,
    },
    /// Cam housings and edge bolt bores at both ends of a horizontal panel
    MinifixHorizontal { profile: MinifixProfile },
    /// Bolt seats on a vertical panel at the given joint heights
    MinifixVertical {
        profile: MinifixProfile,
        joint_heights: Vec<f64>,
    },
    /// Front and back System32 shelf-pin rows
    ShelfPins { profile: ShelfPinProfile },
}

/// Generator for piece drilling coordinates
pub struct MachiningCoordinateGenerator;

impl MachiningCoordinateGenerator {
    pub fn generate(
        piece: &PieceGeometry,
        spec: &ConnectorSpec,
    ) -> MachiningResult<Vec<MachiningOperation>> {
        match spec {
            ConnectorSpec::Hinge {
                profile,
                count,
                side,
            } => hinge_operations(piece, profile, *count, *side),
            ConnectorSpec::MinifixHorizontal { profile } => minifix_horizontal(piece, profile),
            ConnectorSpec::MinifixVertical {
                profile,
                joint_heights,
            } => minifix_vertical(piece, profile, joint_heights),
            ConnectorSpec::ShelfPins { profile } => system32_rows(piece, profile),
        }
    }
}

/// Hinge centre heights: first at `margin_lower`, last at
/// `height - margin_upper`, interior hinges evenly spaced. A single hinge
/// sits at mid-height.
pub fn hinge_positions(height: f64, count: u32, margin_lower: f64, margin_upper: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![height / 2.0],
        n => {
            let span = height - margin_lower - margin_upper;
            let step = span / f64::from(n - 1);
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        height - margin_upper
                    } else {
                        margin_lower + f64::from(i) * step
                    }
                })
                .collect()
        }
    }
}

pub fn hinge_operations(
    piece: &PieceGeometry,
    profile: &HingeProfile,
    count: u32,
    side: HingeSide,
) -> MachiningResult<Vec<MachiningOperation>> {
    piece.check()?;
    if count >= 2 && profile.margin_lower + profile.margin_upper >= piece.height {
        return Err(MachiningError::InvalidSpec(format!(
            "hinge margins {} + {} leave no span on a {} mm door",
            profile.margin_lower, profile.margin_upper, piece.height
        )));
    }

    let x = match side {
        HingeSide::Left => profile.edge_offset,
        HingeSide::Right => piece.width - profile.edge_offset,
    };

    let mut operations = Vec::new();
    for (i, y) in hinge_positions(piece.height, count, profile.margin_lower, profile.margin_upper)
        .into_iter()
        .enumerate()
    {
        let n = i + 1;
        operations.push(MachiningOperation::drill(
            Feature::HingeCup,
            Face::Front,
            x,
            y,
            profile.cup.diameter,
            profile.cup.depth,
            format!("hinge {} cup", n),
        ));
        for (label, offset) in [("lower", -profile.pilot_spacing), ("upper", profile.pilot_spacing)] {
            operations.push(MachiningOperation::drill(
                Feature::HingePilot,
                Face::Front,
                x,
                y + offset,
                profile.pilot.diameter,
                profile.pilot.depth,
                format!("hinge {} {} pilot", n, label),
            ));
        }
    }

    validate_operations(piece, &operations)?;
    debug!(piece = %piece.id, hinges = count, ops = operations.len(), "Generated hinge operations");
    Ok(operations)
}

/// Positions along a joint: `end_inset` from the front and from the back
fn joint_positions(length: f64, end_inset: f64) -> [f64; 2] {
    [end_inset, length - end_inset]
}

/// Cam housings on the face and bolt bores in the A1/A2 end edges of a
/// horizontal panel (floor or ceiling). The panel's height axis runs front
/// to back.
pub fn minifix_horizontal(
    piece: &PieceGeometry,
    profile: &MinifixProfile,
) -> MachiningResult<Vec<MachiningOperation>> {
    piece.check()?;
    let mut operations = Vec::new();

    for (slot, cam_x, end) in [
        (EdgeSlot::A1, profile.cam_offset, "left"),
        (EdgeSlot::A2, piece.width - profile.cam_offset, "right"),
    ] {
        for (j, y) in joint_positions(piece.height, profile.end_inset)
            .into_iter()
            .enumerate()
        {
            operations.push(MachiningOperation::drill(
                Feature::MinifixCam,
                Face::Front,
                cam_x,
                y,
                profile.cam.diameter,
                profile.cam.depth,
                format!("minifix cam {} {}", end, j + 1),
            ));
            operations.push(MachiningOperation::drill(
                Feature::MinifixBolt,
                Face::Edge(slot),
                y,
                piece.thickness / 2.0,
                profile.bolt.diameter,
                profile.bolt.depth,
                format!("minifix bolt {} {}", end, j + 1),
            ));
        }
    }

    validate_operations(piece, &operations)?;
    debug!(piece = %piece.id, ops = operations.len(), "Generated minifix horizontal operations");
    Ok(operations)
}

/// Bolt seats on the face of a vertical panel (lateral) at each joint
/// height. The panel's width axis runs front to back.
pub fn minifix_vertical(
    piece: &PieceGeometry,
    profile: &MinifixProfile,
    joint_heights: &[f64],
) -> MachiningResult<Vec<MachiningOperation>> {
    piece.check()?;
    let mut operations = Vec::new();

    for (i, y) in joint_heights.iter().enumerate() {
        for (j, x) in joint_positions(piece.width, profile.end_inset)
            .into_iter()
            .enumerate()
        {
            operations.push(MachiningOperation::drill(
                Feature::MinifixPin,
                Face::Front,
                x,
                *y,
                profile.pin.diameter,
                profile.pin.depth,
                format!("minifix seat {}.{}", i + 1, j + 1),
            ));
        }
    }

    validate_operations(piece, &operations)?;
    debug!(piece = %piece.id, ops = operations.len(), "Generated minifix vertical operations");
    Ok(operations)
}

/// System32 rows: one near the front, one near the back, holes every
/// `pitch` from `margin_lower` up to `height - margin_upper`.
pub fn system32_rows(
    piece: &PieceGeometry,
    profile: &ShelfPinProfile,
) -> MachiningResult<Vec<MachiningOperation>> {
    piece.check()?;
    if !profile.pitch.is_finite() || profile.pitch <= 0.0 {
        return Err(MachiningError::InvalidSpec(format!(
            "shelf pin pitch must be positive, got {}",
            profile.pitch
        )));
    }

    let top = piece.height - profile.margin_upper;
    let holes_per_row = if top < profile.margin_lower {
        0
    } else {
        ((top - profile.margin_lower) / profile.pitch + 1e-9).floor() as u32 + 1
    };

    let mut operations = Vec::new();
    for (row, x) in [
        ("front", profile.front_setback),
        ("back", piece.width - profile.back_setback),
    ] {
        for k in 0..holes_per_row {
            operations.push(MachiningOperation::drill(
                Feature::ShelfPin,
                Face::Front,
                x,
                profile.margin_lower + f64::from(k) * profile.pitch,
                profile.hole.diameter,
                profile.hole.depth,
                format!("shelf pin {} {}", row, k + 1),
            ));
        }
    }

    validate_operations(piece, &operations)?;
    debug!(piece = %piece.id, ops = operations.len(), "Generated System32 rows");
    Ok(operations)
}
