//! Tolerant field resolution over scanner output documents.
//!
//! The two input documents come from independently versioned producers
//! that do not agree on nesting: summary counts live under `scan.summary`
//! or directly under `scan`, and the call-site list under `scan.sites` or
//! top-level `sites`. Each field is resolved through an explicit ordered
//! list of candidate paths, nested first, and the first match wins.
//! Absent fields default; a nesting difference is never an error.

use serde_json::Value;

use crate::util::json::{float_field, int_field, str_field};

/// Grade label used when the score section carries no grade.
pub const UNKNOWN_GRADE: &str = "?";

/// Candidate locations of the scan summary object, in precedence order.
const SUMMARY_PATHS: &[&[&str]] = &[&["scan", "summary"], &["scan"]];

/// Candidate locations of the call-site list, in precedence order.
const SITES_PATHS: &[&[&str]] = &[&["scan", "sites"], &["sites"]];

/// Summary counts resolved from one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCounts {
    pub sites_total: i64,
    pub instrumented: i64,
    pub uninstrumented: i64,
}

/// Score fields resolved from one document.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreFields {
    pub score: f64,
    pub grade: String,
}

/// Walk `candidates` in order and return the first value present.
pub fn lookup<'a>(doc: &'a Value, candidates: &[&[&str]]) -> Option<&'a Value> {
    candidates.iter().find_map(|path| {
        path.iter()
            .try_fold(doc, |current, key| current.get(*key))
    })
}

/// Resolve the summary counts, preferring `scan.summary` over `scan`.
pub fn scan_counts(doc: &Value) -> ScanCounts {
    let summary = lookup(doc, SUMMARY_PATHS);
    ScanCounts {
        sites_total: int_field(summary, "sites_total"),
        instrumented: int_field(summary, "instrumented"),
        uninstrumented: int_field(summary, "uninstrumented"),
    }
}

/// Resolve score and grade from the `score` section.
pub fn score_fields(doc: &Value) -> ScoreFields {
    let score = doc.get("score");
    ScoreFields {
        score: float_field(score, "score"),
        grade: str_field(score, "grade", UNKNOWN_GRADE),
    }
}

/// Resolve the call-site list, preferring `scan.sites` over `sites`.
/// Absent or non-list values read as empty.
pub fn sites(doc: &Value) -> &[Value] {
    lookup(doc, SITES_PATHS)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
