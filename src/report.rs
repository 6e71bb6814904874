//! Quote report emitted by the CLI

use cabinetkit_costing::CostBreakdown;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub modules: usize,
    pub breakdown: CostBreakdown,
}

impl QuoteReport {
    pub fn new(breakdown: CostBreakdown, modules: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            version: crate::VERSION.to_string(),
            modules,
            breakdown,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
