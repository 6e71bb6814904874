//! Parametric cabinet module specification

use super::hardware::HardwareId;
use super::pieces::Piece;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Module identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
pub struct ModuleId(pub String);

impl ModuleId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Installation zone of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// Floor-standing base unit (stands on legs, open top with stretchers)
    Base,
    /// Wall-hung unit
    Wall,
    /// Full-height tower
    Tower,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base => write!(f, "BASE"),
            Self::Wall => write!(f, "WALL"),
            Self::Tower => write!(f, "TOWER"),
        }
    }
}

/// Drawer construction system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DrawerSystem {
    /// Metal sides; only bottom and back are cut from board
    #[default]
    Metal,
    /// Full board box: two sides, inner front, back, bottom and visible front
    Melamine {
        /// Bottom slides into routed grooves
        grooved_bottom: bool,
    },
}

/// How the back panel is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BackMounting {
    /// Nailed over the carcass; covers the full module face
    Overlay,
    /// Fitted between laterals, floor and top
    #[default]
    Inset,
}

/// Parametric description of one cabinet module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    #[serde(default = "ModuleId::generate")]
    pub id: ModuleId,
    #[serde(default)]
    pub name: String,
    pub zone: Zone,
    /// Outer width in mm
    pub width: f64,
    /// Outer height in mm (legs excluded)
    pub height: f64,
    /// Outer depth in mm
    pub depth: f64,
    #[serde(default)]
    pub door_count: u32,
    #[serde(default)]
    pub drawer_count: u32,
    #[serde(default)]
    pub shelf_count: u32,
    #[serde(default)]
    pub drawer_system: DrawerSystem,
    #[serde(default)]
    pub back_mounting: BackMounting,
    #[serde(default)]
    pub hinge_id: Option<HardwareId>,
    #[serde(default)]
    pub slide_id: Option<HardwareId>,
    /// Modules sharing a template receive batch-propagated edits
    #[serde(default)]
    pub template_id: Option<String>,
    /// Manual piece list; the source of truth while set
    #[serde(default)]
    pub custom_pieces: Option<Vec<Piece>>,
}

impl ModuleSpec {
    pub fn new(id: impl Into<ModuleId>, zone: Zone, width: f64, height: f64, depth: f64) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            zone,
            width,
            height,
            depth,
            door_count: 0,
            drawer_count: 0,
            shelf_count: 0,
            drawer_system: DrawerSystem::default(),
            back_mounting: BackMounting::default(),
            hinge_id: None,
            slide_id: None,
            template_id: None,
            custom_pieces: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_doors(mut self, count: u32, hinge_id: Option<HardwareId>) -> Self {
        self.door_count = count;
        self.hinge_id = hinge_id;
        self
    }

    pub fn with_drawers(
        mut self,
        count: u32,
        system: DrawerSystem,
        slide_id: Option<HardwareId>,
    ) -> Self {
        self.drawer_count = count;
        self.drawer_system = system;
        self.slide_id = slide_id;
        self
    }

    pub fn with_shelves(mut self, count: u32) -> Self {
        self.shelf_count = count;
        self
    }

    pub fn with_back_mounting(mut self, mounting: BackMounting) -> Self {
        self.back_mounting = mounting;
        self
    }

    pub fn with_template(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    pub fn has_custom_pieces(&self) -> bool {
        self.custom_pieces.is_some()
    }

    /// Human label for logs and reports
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.id.0
        } else {
            &self.name
        }
    }
}
