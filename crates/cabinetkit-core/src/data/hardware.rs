//! Hardware catalog
//!
//! Every hardware item carries a closed, per-kind install profile. Drilling
//! depths live in these profiles and are required: a catalog entry without
//! them fails to deserialize instead of falling back to a guessed value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hardware identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct HardwareId(pub String);

impl std::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HardwareId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Diameter and depth of one drilled feature (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillProfile {
    pub diameter: f64,
    pub depth: f64,
}

impl DrillProfile {
    pub fn new(diameter: f64, depth: f64) -> Self {
        Self { diameter, depth }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Concealed hinge install profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HingeProfile {
    /// Cup bore (35 mm on standard hinges)
    pub cup: DrillProfile,
    /// Mounting screw pilot holes
    pub pilot: DrillProfile,
    /// Distance of each pilot hole from the cup centre along the door height
    pub pilot_spacing: f64,
    /// Cup centre distance from the hinge-side edge
    pub edge_offset: f64,
    /// First hinge centre, measured from the bottom of the door
    pub margin_lower: f64,
    /// Last hinge centre, measured from the top of the door
    pub margin_upper: f64,
}

impl HingeProfile {
    /// Standard 35 mm cup geometry with caller-supplied drilling depths
    pub fn standard(cup_depth: f64, pilot_depth: f64) -> Self {
        Self {
            cup: DrillProfile::new(35.0, cup_depth),
            pilot: DrillProfile::new(2.0, pilot_depth),
            pilot_spacing: 17.5,
            edge_offset: 22.5,
            margin_lower: 100.0,
            margin_upper: 100.0,
        }
    }
}

/// Drawer slide profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideProfile {
    /// Nominal rail length (mm)
    pub length: f64,
}

/// Adjustable leg profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegProfile {
    /// Nominal leg height (mm)
    pub height: f64,
}

/// Minifix cam-and-bolt connector profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinifixProfile {
    /// Cam housing bored into the face of the horizontal panel
    pub cam: DrillProfile,
    /// Bolt channel bored into the edge of the horizontal panel
    pub bolt: DrillProfile,
    /// Bolt seat bored into the face of the vertical panel
    pub pin: DrillProfile,
    /// Cam centre distance from the joint edge
    pub cam_offset: f64,
    /// Connector distance from the front and back ends of the joint
    pub end_inset: f64,
}

/// System32 shelf-pin row profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfPinProfile {
    pub hole: DrillProfile,
    /// Row pitch (32 mm for System32)
    pub pitch: f64,
    /// Front row distance from the front edge
    pub front_setback: f64,
    /// Back row distance from the back edge
    pub back_setback: f64,
    /// First hole distance from the bottom of the panel
    pub margin_lower: f64,
    /// Minimum distance of the last hole from the top of the panel
    pub margin_upper: f64,
}

/// Closed set of hardware kinds with their install profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HardwareKind {
    Hinge(HingeProfile),
    /// Priced per pair
    Slide(SlideProfile),
    Leg(LegProfile),
    Minifix(MinifixProfile),
    ShelfPin(ShelfPinProfile),
    Screw,
}

impl HardwareKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hinge(_) => "hinge",
            Self::Slide(_) => "slide",
            Self::Leg(_) => "leg",
            Self::Minifix(_) => "minifix",
            Self::ShelfPin(_) => "shelf_pin",
            Self::Screw => "screw",
        }
    }
}

/// Catalog hardware entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareItem {
    pub id: HardwareId,
    pub name: String,
    pub unit_price: f64,
    pub kind: HardwareKind,
}

impl HardwareItem {
    pub fn new(
        id: impl Into<HardwareId>,
        name: impl Into<String>,
        unit_price: f64,
        kind: HardwareKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            kind,
        }
    }
}

/// Hardware catalog keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardwareCatalog {
    items: BTreeMap<HardwareId, HardwareItem>,
}

impl HardwareCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: HardwareItem) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn get(&self, id: &HardwareId) -> Option<&HardwareItem> {
        self.items.get(id)
    }

    /// Hinge install profile for `id`, if it is a hinge
    pub fn hinge_profile(&self, id: &HardwareId) -> Option<&HingeProfile> {
        match self.items.get(id).map(|item| &item.kind) {
            Some(HardwareKind::Hinge(profile)) => Some(profile),
            _ => None,
        }
    }

    /// First Minifix connector in id order
    pub fn minifix(&self) -> Option<&MinifixProfile> {
        self.items.values().find_map(|item| match &item.kind {
            HardwareKind::Minifix(profile) => Some(profile),
            _ => None,
        })
    }

    /// First shelf-pin profile in id order
    pub fn shelf_pin(&self) -> Option<&ShelfPinProfile> {
        self.items.values().find_map(|item| match &item.kind {
            HardwareKind::ShelfPin(profile) => Some(profile),
            _ => None,
        })
    }

    /// All items in id order
    pub fn items(&self) -> impl Iterator<Item = &HardwareItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<HardwareItem> for HardwareCatalog {
    fn from_iter<I: IntoIterator<Item = HardwareItem>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for item in iter {
            catalog.add_item(item);
        }
        catalog
    }
}

/// Leg count decided for a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRule {
    pub quantity: u32,
    pub reason: String,
}

/// Hinge count decided for a module's doors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HingeRule {
    pub per_door: u32,
    pub total: u32,
    pub reason: String,
}

/// Slide pairs decided for a module's drawers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideRule {
    pub pairs: u32,
}

/// Hardware quantities assigned to one module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareAssignment {
    /// `None` for zones that stand on no legs
    pub legs: Option<LegRule>,
    pub hinges: HingeRule,
    pub slides: SlideRule,
}
