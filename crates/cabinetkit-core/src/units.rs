//! Rounding and unit helpers
//!
//! Geometry is carried in millimetres as `f64`. Cut-list dimensions snap to
//! the nearest 0.1 mm; currency and machine time snap to 2 decimals.

/// Millimetres per metre
pub const MM_PER_M: f64 = 1000.0;

/// Square millimetres per square metre
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// Round `value` to `decimals` places. Non-finite input yields 0 and
/// negative zero is normalised so formatted output stays stable.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round to the nearest 0.1 mm
pub fn round_tenth(value: f64) -> f64 {
    round_to(value, 1)
}

/// Round to 2 decimals (currency, hours)
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Convert millimetres to metres
pub fn mm_to_m(value_mm: f64) -> f64 {
    value_mm / MM_PER_M
}

/// Format a millimetre value without trailing zeros ("35", "4.5", "0.25")
pub fn format_mm(value_mm: f64) -> String {
    let text = format!("{:.2}", round_cents(value_mm));
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text.is_empty() || text == "-" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
