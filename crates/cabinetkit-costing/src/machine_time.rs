//! Machine time model
//!
//! `hours = metres / speed (m/min) / 60` and
//! `cost = hours * (power_kw * energy_price + operation_cost_per_hour)`.
//! Degenerate input resolves to zero so one bad machine record cannot
//! poison a quote.

use cabinetkit_core::units::round_cents;
use cabinetkit_core::{Machine, MachineKind};
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Time and cost of running one machine over a length of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineLine {
    pub machine: String,
    pub kind: MachineKind,
    pub meters: f64,
    /// Rounded to 2 decimals
    pub hours: f64,
    /// Rounded to 2 decimals
    pub cost: f64,
}

impl MachineLine {
    /// A zero line for a machine kind with no machine configured
    pub fn missing(kind: MachineKind, meters: f64) -> Self {
        Self {
            machine: String::new(),
            kind,
            meters: round_cents(meters),
            hours: 0.0,
            cost: 0.0,
        }
    }
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Unrounded hours to process `meters`; zero for non-positive input
pub fn machine_hours(meters: f64, speed_m_per_min: f64) -> f64 {
    if usable(meters) && usable(speed_m_per_min) {
        meters / speed_m_per_min / MINUTES_PER_HOUR
    } else {
        0.0
    }
}

/// Hourly running cost of a machine at the given energy price
pub fn hourly_rate(machine: &Machine, energy_price_per_kwh: f64) -> f64 {
    let rate = machine.power_kw * energy_price_per_kwh + machine.operation_cost_per_hour;
    if rate.is_finite() {
        rate.max(0.0)
    } else {
        0.0
    }
}

/// Cost `meters` of work on `machine`. Cost is taken from the unrounded
/// time; both are rounded to 2 decimals afterwards.
pub fn machine_line(machine: &Machine, meters: f64, energy_price_per_kwh: f64) -> MachineLine {
    let hours = machine_hours(meters, machine.processing_speed);
    let cost = hours * hourly_rate(machine, energy_price_per_kwh);
    MachineLine {
        machine: machine.name.clone(),
        kind: machine.kind,
        meters: round_cents(meters.max(0.0)),
        hours: round_cents(hours),
        cost: round_cents(cost),
    }
}
