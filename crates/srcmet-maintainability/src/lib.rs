//! Maintainability index scoring and severity banding.

#![forbid(unsafe_code)]

use srcmet_math::{clamp_range, ln_or_zero};
use srcmet_types::MaintainabilityBand;

/// Coefficients of the composite formula.
///
/// MI = base - volume_weight * ln(V) - cyclomatic_weight * CC
///           - loc_weight * ln(LOC)
///
/// Kept as data rather than literals so callers can validate alternative
/// calibrations against known sample outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiCoefficients {
    pub base: f64,
    pub volume_weight: f64,
    pub cyclomatic_weight: f64,
    pub loc_weight: f64,
}

impl Default for MiCoefficients {
    fn default() -> Self {
        MiCoefficients {
            base: 171.0,
            volume_weight: 5.2,
            cyclomatic_weight: 0.23,
            loc_weight: 16.2,
        }
    }
}

const SCORE_MIN: f64 = 0.0;
const SCORE_MAX: f64 = 100.0;

const BAND_WARNING_FLOOR: f64 = 10.0;
const BAND_HEALTHY_FLOOR: f64 = 20.0;

/// Compute the maintainability index with explicit coefficients.
///
/// Logarithm terms with a non-positive argument drop to zero; the result is
/// clamped to the presentational [0, 100] range and is always finite.
#[must_use]
pub fn maintainability_index_with(
    coefficients: &MiCoefficients,
    halstead_volume: f64,
    cyclomatic_complexity: usize,
    code_lines: usize,
) -> f64 {
    let raw = coefficients.base
        - coefficients.volume_weight * ln_or_zero(halstead_volume)
        - coefficients.cyclomatic_weight * cyclomatic_complexity as f64
        - coefficients.loc_weight * ln_or_zero(code_lines as f64);
    clamp_range(raw, SCORE_MIN, SCORE_MAX)
}

/// Compute the maintainability index with the published coefficients.
#[must_use]
pub fn maintainability_index(
    halstead_volume: f64,
    cyclomatic_complexity: usize,
    code_lines: usize,
) -> f64 {
    maintainability_index_with(
        &MiCoefficients::default(),
        halstead_volume,
        cyclomatic_complexity,
        code_lines,
    )
}

/// Severity band for a score: 0-9 critical, 10-19 warning, 20-100 healthy.
#[must_use]
pub fn band_for_score(score: f64) -> MaintainabilityBand {
    if score < BAND_WARNING_FLOOR {
        MaintainabilityBand::Critical
    } else if score < BAND_HEALTHY_FLOOR {
        MaintainabilityBand::Warning
    } else {
        MaintainabilityBand::Healthy
    }
}
