//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Natural logarithm, or 0.0 when the argument is non-positive.
///
/// The maintainability formula drops terms whose logarithm argument would
/// not be finite; this keeps every composed score finite.
#[must_use]
pub fn ln_or_zero(value: f64) -> f64 {
    if value > 0.0 { value.ln() } else { 0.0 }
}

/// Base-2 logarithm, or 0.0 when the argument is non-positive.
#[must_use]
pub fn log2_or_zero(value: f64) -> f64 {
    if value > 0.0 { value.log2() } else { 0.0 }
}

/// Clamp a score into `[lo, hi]`.
#[must_use]
pub fn clamp_range(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}
