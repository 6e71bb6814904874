//! Typed piece override commands
//!
//! A command edits the module's current piece list and stores the result
//! as the module's manual override. Pieces are addressed by id or by
//! structural role, never by name.

use crate::context::ConstructionContext;
use crate::error::{DesignError, DesignResult};
use crate::recompute::current_pieces;
use cabinetkit_core::{EdgeBand, EdgeSlot, MaterialId, ModuleSpec, Piece, PieceId, PieceRole};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which pieces a command applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum PieceSelector {
    Id(PieceId),
    Role(PieceRole),
}

impl PieceSelector {
    pub fn matches(&self, piece: &Piece) -> bool {
        match self {
            Self::Id(id) => &piece.id == id,
            Self::Role(role) => &piece.role == role,
        }
    }
}

impl fmt::Display for PieceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id '{}'", id),
            Self::Role(role) => write!(f, "role {:?}", role),
        }
    }
}

/// Manual override applied to a module's pieces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PieceCommand {
    SetFinalWidth {
        target: PieceSelector,
        value: f64,
    },
    SetFinalHeight {
        target: PieceSelector,
        value: f64,
    },
    SetQuantity {
        target: PieceSelector,
        quantity: u32,
    },
    SetEdge {
        target: PieceSelector,
        slot: EdgeSlot,
        band: Option<EdgeBand>,
    },
    SetMaterial {
        target: PieceSelector,
        material: Option<MaterialId>,
    },
    Remove {
        target: PieceSelector,
    },
    Add {
        piece: Piece,
    },
}

impl PieceCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetFinalWidth { .. } => "set final width",
            Self::SetFinalHeight { .. } => "set final height",
            Self::SetQuantity { .. } => "set quantity",
            Self::SetEdge { .. } => "set edge",
            Self::SetMaterial { .. } => "set material",
            Self::Remove { .. } => "remove",
            Self::Add { .. } => "add",
        }
    }

    fn target(&self) -> Option<&PieceSelector> {
        match self {
            Self::SetFinalWidth { target, .. }
            | Self::SetFinalHeight { target, .. }
            | Self::SetQuantity { target, .. }
            | Self::SetEdge { target, .. }
            | Self::SetMaterial { target, .. }
            | Self::Remove { target } => Some(target),
            Self::Add { .. } => None,
        }
    }

    /// Reject values no physical piece can have
    fn validate(&self) -> DesignResult<()> {
        match self {
            Self::SetFinalWidth { value, .. } => positive("final_width", *value),
            Self::SetFinalHeight { value, .. } => positive("final_height", *value),
            Self::SetQuantity { quantity: 0, .. } => {
                Err(DesignError::invalid_value("quantity", "must be at least 1"))
            }
            Self::SetEdge {
                band: Some(EdgeBand::Fixed { thickness }),
                ..
            } if !thickness.is_finite() || *thickness < 0.0 => Err(DesignError::invalid_value(
                "edge",
                format!("thickness must be non-negative, got {}", thickness),
            )),
            Self::Add { piece } => {
                positive("final_width", piece.final_width)?;
                positive("final_height", piece.final_height)?;
                if piece.quantity == 0 {
                    return Err(DesignError::invalid_value("quantity", "must be at least 1"));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

fn positive(field: &str, value: f64) -> DesignResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DesignError::invalid_value(
            field,
            format!("must be positive, got {}", value),
        ))
    }
}

/// Apply a command to the module's current pieces, returning the module
/// with the edited list stored as its override
pub fn apply_piece_command(
    module: &ModuleSpec,
    command: &PieceCommand,
    ctx: &ConstructionContext,
) -> DesignResult<ModuleSpec> {
    command.validate()?;
    let mut pieces = current_pieces(module, ctx)?;

    if let Some(selector) = command.target() {
        if !pieces.iter().any(|p| selector.matches(p)) {
            return Err(DesignError::NoMatchingPiece {
                module_id: module.id.clone(),
                selector: selector.to_string(),
            });
        }
    }

    match command {
        PieceCommand::SetFinalWidth { target, value } => {
            for_each_match(&mut pieces, target, |p| p.final_width = *value)
        }
        PieceCommand::SetFinalHeight { target, value } => {
            for_each_match(&mut pieces, target, |p| p.final_height = *value)
        }
        PieceCommand::SetQuantity { target, quantity } => {
            for_each_match(&mut pieces, target, |p| p.quantity = *quantity)
        }
        PieceCommand::SetEdge { target, slot, band } => {
            for_each_match(&mut pieces, target, |p| p.edges.set(*slot, band.clone()))
        }
        PieceCommand::SetMaterial { target, material } => {
            for_each_match(&mut pieces, target, |p| p.material = material.clone())
        }
        PieceCommand::Remove { target } => pieces.retain(|p| !target.matches(p)),
        PieceCommand::Add { piece } => {
            if pieces.iter().any(|p| p.id == piece.id) {
                return Err(DesignError::invalid_value(
                    "id",
                    format!("piece '{}' already exists", piece.id),
                ));
            }
            pieces.push(piece.clone());
        }
    }

    debug!(
        module = %module.label(),
        command = command.name(),
        pieces = pieces.len(),
        "Applied piece command"
    );

    let mut next = module.clone();
    next.custom_pieces = Some(pieces);
    Ok(next)
}

fn for_each_match(pieces: &mut [Piece], selector: &PieceSelector, mut edit: impl FnMut(&mut Piece)) {
    pieces
        .iter_mut()
        .filter(|p| selector.matches(p))
        .for_each(|p| edit(p));
}
