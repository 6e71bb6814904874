//! Non-fatal findings surfaced to callers alongside a successful result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Edge banding consumes the whole panel; the cut size is 0
    CutDimensionFloored,
    /// A piece's board material is missing from the catalog
    UnknownMaterial,
    /// An edge slot references a material missing from the catalog
    UnknownEdgeMaterial,
    /// No machine of a required kind is configured
    MissingMachine,
    /// A module references hardware missing from the catalog
    MissingHardware,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CutDimensionFloored => write!(f, "cut dimension floored"),
            Self::UnknownMaterial => write!(f, "unknown material"),
            Self::UnknownEdgeMaterial => write!(f, "unknown edge material"),
            Self::MissingMachine => write!(f, "missing machine"),
            Self::MissingHardware => write!(f, "missing hardware"),
        }
    }
}

/// A warning attached to a piece, module or machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub kind: WarningKind,
    /// Identifier of the offending piece, module or machine
    pub subject: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(kind: WarningKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
    }
}
