//! # srcmet-types
//!
//! **Tier 0 (Metric Contract)**
//!
//! Pure data structures for srcmet metric results. No I/O or business logic.
//!
//! ## What belongs here
//! * Metric report types and the aggregate `MetricResult`
//! * The caller-facing response shapes (stable wire contract)
//! * The `MetricsReceipt` envelope
//!
//! ## What does NOT belong here
//! * Metric computation (use the analyzer microcrates)
//! * Payload validation or I/O (use the srcmet CLI crate)

use serde::{Deserialize, Serialize};

/// Schema version for metric receipts.
/// v1: Initial receipt layout (maintainability, loop depth, Halstead, line counts).
pub const METRICS_SCHEMA_VERSION: u32 = 1;

// -------------------
// Halstead metrics
// -------------------

/// Token-count-based size/difficulty/effort measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalsteadMetrics {
    /// Number of distinct operators (n1).
    pub distinct_operators: usize,
    /// Number of distinct operands (n2).
    pub distinct_operands: usize,
    /// Total number of operators (N1).
    pub total_operators: usize,
    /// Total number of operands (N2).
    pub total_operands: usize,
    /// Program vocabulary: n1 + n2.
    pub vocabulary: usize,
    /// Program length: N1 + N2.
    pub length: usize,
    /// Volume: N * log2(n); 0 when the vocabulary is 1 or empty.
    pub volume: f64,
    /// Difficulty: (n1/2) * (N2/n2); 0 when there are no operands.
    pub difficulty: f64,
    /// Effort: D * V.
    pub effort: f64,
    /// Estimated programming time in seconds: E / 18.
    pub time_seconds: f64,
    /// Estimated number of delivered bugs: V / 3000.
    pub estimated_bugs: f64,
}

// -------------------
// Line counts
// -------------------

/// Per-line accounting plus the unique function-declaration count.
///
/// Serialized in camelCase: this is the wire shape existing callers consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCountReport {
    /// Lines carrying at least one non-comment token.
    pub code_lines: usize,
    /// Lines whose entire content is comment.
    pub comment_lines: usize,
    /// Lines containing only whitespace.
    pub blank_lines: usize,
    /// Distinct function/method declarations (best-effort heuristic).
    pub function_count: usize,
}

// -------------------
// Maintainability
// -------------------

/// Caller-facing severity band over the maintainability index.
///
/// Thresholds are a presentation rule downstream consumers depend on:
/// 0-9 critical, 10-19 warning, 20-100 healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintainabilityBand {
    Critical,
    Warning,
    Healthy,
}

/// Composite maintainability score and the inputs it was blended from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityReport {
    /// Composite index, clamped to [0, 100].
    pub index: f64,
    /// McCabe decision-point count, minimum 1.
    pub cyclomatic_complexity: usize,
    /// Code lines (blank and comment-only lines excluded).
    pub lines_of_code: usize,
    /// Severity band for the index.
    pub band: MaintainabilityBand,
}

// -------------------
// Aggregate result
// -------------------

/// Everything one engine invocation produces. Created fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Total physical lines in the payload.
    pub total_lines: usize,
    pub maintainability: MaintainabilityReport,
    /// Maximum loop-nesting depth.
    pub loop_depth: usize,
    pub halstead: HalsteadMetrics,
    pub line_counts: LineCountReport,
}

// -------------------
// Response shapes
// -------------------

/// Ordered triple `[maintainabilityIndex, cyclomaticComplexity, linesOfCode]`.
///
/// Serializes as a bare JSON array; callers index into it positionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintainabilityResponse(pub f64, pub usize, pub usize);

/// The five-field Halstead response existing callers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HalsteadResponse {
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub effort: f64,
    pub difficulty: f64,
}

// -------------------
// Receipt envelope
// -------------------

/// Tool identification embedded in receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Self-describing envelope around a full metric run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReceipt {
    /// Schema identifier (see [`METRICS_SCHEMA_VERSION`]).
    pub schema_version: u32,
    /// Generation timestamp, milliseconds since the Unix epoch.
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    /// blake3 hex digest of the payload; key for content-addressed caching.
    pub source_signature: String,
    pub total_lines: usize,
    pub maintainability: MaintainabilityReport,
    pub loop_depth: usize,
    pub halstead: HalsteadMetrics,
    pub line_counts: LineCountReport,
}
