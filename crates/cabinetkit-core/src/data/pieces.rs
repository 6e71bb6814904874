//! Pieces of a cabinet module
//!
//! A piece carries its finished (visible) size and four edge slots. The cut
//! size is derived on demand by the dimension resolver, never stored.
//!
//! Slot orientation, with the piece drawn width along x and height along y:
//!
//! ```text
//!              L2 (top)
//!          +--------------+
//!  A1 left |              | A2 right
//!          +--------------+
//!             L1 (bottom)
//! ```
//!
//! L slots run along the width axis but consume height; A slots run along
//! the height axis but consume width.

use super::materials::MaterialId;
use crate::units::{mm_to_m, MM2_PER_M2};
use serde::{Deserialize, Serialize};

/// Piece identifier, unique within its module
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct PieceId(pub String);

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PieceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Side a door is hung from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HingeSide {
    Left,
    Right,
}

/// Structural role assigned at generation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PieceRole {
    Lateral,
    Floor,
    Ceiling,
    Stretcher,
    Back,
    Shelf,
    Door { hinge: HingeSide },
    DrawerSide,
    /// Inner front of a melamine drawer box
    DrawerFront,
    DrawerBack,
    DrawerBottom,
    /// Visible drawer front
    DrawerFace,
}

impl PieceRole {
    /// Cut-list grouping
    pub fn category(&self) -> &'static str {
        match self {
            Self::Lateral | Self::Floor | Self::Ceiling | Self::Stretcher | Self::Shelf => {
                "carcass"
            }
            Self::Back => "back",
            Self::Door { .. } | Self::DrawerFace => "front",
            Self::DrawerSide | Self::DrawerFront | Self::DrawerBack | Self::DrawerBottom => {
                "drawer"
            }
        }
    }

    pub fn is_drawer(&self) -> bool {
        matches!(
            self,
            Self::DrawerSide
                | Self::DrawerFront
                | Self::DrawerBack
                | Self::DrawerBottom
                | Self::DrawerFace
        )
    }
}

/// Axis of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PieceAxis {
    Width,
    Height,
}

/// Edge slot of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub enum EdgeSlot {
    L1,
    L2,
    A1,
    A2,
}

impl EdgeSlot {
    pub const ALL: [EdgeSlot; 4] = [EdgeSlot::L1, EdgeSlot::L2, EdgeSlot::A1, EdgeSlot::A2];

    /// Axis whose cut size this slot reduces
    pub fn consumes(&self) -> PieceAxis {
        match self {
            Self::L1 | Self::L2 => PieceAxis::Height,
            Self::A1 | Self::A2 => PieceAxis::Width,
        }
    }

    /// Axis the band runs along; its finished length is the banding length
    pub fn runs_along(&self) -> PieceAxis {
        match self {
            Self::L1 | Self::L2 => PieceAxis::Width,
            Self::A1 | Self::A2 => PieceAxis::Height,
        }
    }
}

/// Content of an occupied edge slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeBand {
    /// Banding strip from the catalog; priced and counted in edge metres
    Material(MaterialId),
    /// Structural allowance in mm; subtracted from the cut size only
    Fixed { thickness: f64 },
}

impl EdgeBand {
    pub fn fixed(thickness: f64) -> Self {
        Self::Fixed { thickness }
    }

    pub fn material(&self) -> Option<&MaterialId> {
        match self {
            Self::Material(id) => Some(id),
            Self::Fixed { .. } => None,
        }
    }
}

/// The four edge slots of a piece
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1: Option<EdgeBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l2: Option<EdgeBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a1: Option<EdgeBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2: Option<EdgeBand>,
}

impl EdgeSlots {
    pub fn none() -> Self {
        Self::default()
    }

    /// Same band on all four slots
    pub fn all(band: EdgeBand) -> Self {
        Self {
            l1: Some(band.clone()),
            l2: Some(band.clone()),
            a1: Some(band.clone()),
            a2: Some(band),
        }
    }

    pub fn get(&self, slot: EdgeSlot) -> Option<&EdgeBand> {
        match slot {
            EdgeSlot::L1 => self.l1.as_ref(),
            EdgeSlot::L2 => self.l2.as_ref(),
            EdgeSlot::A1 => self.a1.as_ref(),
            EdgeSlot::A2 => self.a2.as_ref(),
        }
    }

    pub fn set(&mut self, slot: EdgeSlot, band: Option<EdgeBand>) {
        match slot {
            EdgeSlot::L1 => self.l1 = band,
            EdgeSlot::L2 => self.l2 = band,
            EdgeSlot::A1 => self.a1 = band,
            EdgeSlot::A2 => self.a2 = band,
        }
    }

    /// Occupied slots in L1, L2, A1, A2 order
    pub fn occupied(&self) -> impl Iterator<Item = (EdgeSlot, &EdgeBand)> {
        EdgeSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|band| (slot, band)))
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().next().is_none()
    }
}

/// Module dimension a piece axis follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleAxis {
    Width,
    Height,
    Depth,
}

/// A piece axis grows by `factor` × the change of a module axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLink {
    pub axis: ModuleAxis,
    pub factor: f64,
}

impl AxisLink {
    pub fn new(axis: ModuleAxis, factor: f64) -> Self {
        Self { axis, factor }
    }

    pub fn follows(axis: ModuleAxis) -> Self {
        Self::new(axis, 1.0)
    }
}

/// How a piece follows a module resize. Unlinked axes keep their size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResizeRule {
    #[serde(default)]
    pub width: Option<AxisLink>,
    #[serde(default)]
    pub height: Option<AxisLink>,
}

impl ResizeRule {
    pub fn new(width: Option<AxisLink>, height: Option<AxisLink>) -> Self {
        Self { width, height }
    }

    pub fn fixed() -> Self {
        Self::default()
    }
}

/// A cut-list piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub name: String,
    pub role: PieceRole,
    /// Finished width in mm
    pub final_width: f64,
    /// Finished height in mm
    pub final_height: f64,
    pub quantity: u32,
    #[serde(default)]
    pub edges: EdgeSlots,
    /// Board material; `None` falls back to the factory default board
    #[serde(default)]
    pub material: Option<MaterialId>,
    /// Grain direction must follow the height axis
    #[serde(default)]
    pub grain_locked: bool,
    #[serde(default)]
    pub resize: ResizeRule,
}

impl Piece {
    pub fn new(
        id: impl Into<PieceId>,
        name: impl Into<String>,
        role: PieceRole,
        final_width: f64,
        final_height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            final_width,
            final_height,
            quantity: 1,
            edges: EdgeSlots::none(),
            material: None,
            grain_locked: false,
            resize: ResizeRule::fixed(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_material(mut self, material: Option<MaterialId>) -> Self {
        self.material = material;
        self
    }

    pub fn with_edge(mut self, slot: EdgeSlot, band: Option<EdgeBand>) -> Self {
        self.edges.set(slot, band);
        self
    }

    pub fn with_edges(mut self, edges: EdgeSlots) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_resize(mut self, resize: ResizeRule) -> Self {
        self.resize = resize;
        self
    }

    pub fn with_grain_locked(mut self, locked: bool) -> Self {
        self.grain_locked = locked;
        self
    }

    pub fn category(&self) -> &'static str {
        self.role.category()
    }

    /// Finished size along an axis
    pub fn final_size(&self, axis: PieceAxis) -> f64 {
        match axis {
            PieceAxis::Width => self.final_width,
            PieceAxis::Height => self.final_height,
        }
    }

    /// Finished area of all copies in m²
    pub fn area_m2(&self) -> f64 {
        self.final_width * self.final_height * f64::from(self.quantity) / MM2_PER_M2
    }

    /// Finished perimeter of all copies in m
    pub fn perimeter_m(&self) -> f64 {
        mm_to_m((2.0 * self.final_height + 2.0 * self.final_width) * f64::from(self.quantity))
    }
}
