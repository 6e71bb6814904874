//! # CabinetKit Costing
//!
//! Fabrication cost and suggested price for a set of modules.
//!
//! - **Materials**: board area and banding metres at catalog prices
//! - **Hardware**: hinges by the pricing bracket table, one slide pair per drawer
//! - **Consumables**: glue per module and a screw count derived from the hardware
//! - **Operations**: cutting over total perimeter, edge banding over banded length

pub mod aggregator;
pub mod error;
pub mod machine_time;

pub use aggregator::{
    cost_hinges_per_door, CostAggregator, CostBreakdown, CostStats, CostTotals, HardwareLine,
};
pub use error::{CostError, CostResult};
pub use machine_time::{hourly_rate, machine_hours, machine_line, MachineLine};
