//! Workshop machines used by the operations cost model

use serde::{Deserialize, Serialize};

/// What a machine does in the fabrication flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    /// Panel saw or nesting router; processes piece perimeter
    Cutting,
    /// Edge bander; processes banded linear metres
    EdgeBanding,
    /// Boring machine
    Drilling,
}

impl std::fmt::Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cutting => write!(f, "Cutting"),
            Self::EdgeBanding => write!(f, "Edge Banding"),
            Self::Drilling => write!(f, "Drilling"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub kind: MachineKind,
    /// Processing speed in m/min
    pub processing_speed: f64,
    /// Electrical power draw in kW
    pub power_kw: f64,
    /// Labour and wear cost per running hour
    pub operation_cost_per_hour: f64,
}

impl Machine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: MachineKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            processing_speed: 0.0,
            power_kw: 0.0,
            operation_cost_per_hour: 0.0,
        }
    }

    pub fn with_rates(mut self, processing_speed: f64, power_kw: f64, cost_per_hour: f64) -> Self {
        self.processing_speed = processing_speed;
        self.power_kw = power_kw;
        self.operation_cost_per_hour = cost_per_hour;
        self
    }
}
