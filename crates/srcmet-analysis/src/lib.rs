//! Metric aggregation: one payload in, every metric group out.
//!
//! `analyze` is a pure, synchronous function of the input text. It scans
//! once and hands the shared token sequence to each analyzer; nothing is
//! cached or shared between calls, so concurrent calls need no locking.

#![forbid(unsafe_code)]

use srcmet_complexity::cyclomatic_complexity;
use srcmet_halstead::analyze_tokens;
use srcmet_lexer::tokenize;
use srcmet_lines::build_line_report;
use srcmet_maintainability::{band_for_score, maintainability_index};
use srcmet_math::round_f64;
use srcmet_nesting::max_loop_depth;
use srcmet_types::{
    HalsteadMetrics, HalsteadResponse, MaintainabilityReport, MaintainabilityResponse,
    MetricResult,
};

/// Run the full metric pipeline over one source payload.
#[must_use]
pub fn analyze(source: &str) -> MetricResult {
    let scanned = tokenize(source);

    let line_counts = build_line_report(&scanned.tokens, scanned.line_count);
    let cyclomatic = cyclomatic_complexity(&scanned.tokens);
    let loop_depth = max_loop_depth(&scanned.tokens);
    let halstead = analyze_tokens(&scanned.tokens);

    let index = maintainability_index(halstead.volume, cyclomatic, line_counts.code_lines);
    let maintainability = MaintainabilityReport {
        index,
        cyclomatic_complexity: cyclomatic,
        lines_of_code: line_counts.code_lines,
        band: band_for_score(index),
    };

    MetricResult {
        total_lines: scanned.line_count,
        maintainability,
        loop_depth,
        halstead,
        line_counts,
    }
}

/// The ordered `[maintainabilityIndex, cyclomaticComplexity, linesOfCode]`
/// triple, with the index rounded for presentation.
#[must_use]
pub fn maintainability_response(result: &MetricResult) -> MaintainabilityResponse {
    MaintainabilityResponse(
        round_f64(result.maintainability.index, 2),
        result.maintainability.cyclomatic_complexity,
        result.maintainability.lines_of_code,
    )
}

/// The five-field Halstead response, floats rounded for presentation.
#[must_use]
pub fn halstead_response(metrics: &HalsteadMetrics) -> HalsteadResponse {
    HalsteadResponse {
        vocabulary: metrics.vocabulary,
        length: metrics.length,
        volume: round_f64(metrics.volume, 2),
        effort: round_f64(metrics.effort, 2),
        difficulty: round_f64(metrics.difficulty, 2),
    }
}
