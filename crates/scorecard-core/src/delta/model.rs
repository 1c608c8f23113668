use serde::{Deserialize, Serialize};

/// Before/after/difference triple for an integer-valued metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntMetric {
    pub base: i64,
    pub head: i64,
    pub delta: i64,
}

impl IntMetric {
    pub fn new(base: i64, head: i64) -> Self {
        Self {
            base,
            head,
            delta: head - base,
        }
    }
}

/// Before/after/difference triple for a one-decimal float metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatMetric {
    pub base: f64,
    pub head: f64,
    pub delta: f64,
}

/// Grade transition. Grades are categorical, so there is no delta field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradePair {
    pub base: String,
    pub head: String,
}

impl GradePair {
    pub fn changed(&self) -> bool {
        self.base != self.head
    }
}

/// Per-metric comparison of two scan+score documents.
///
/// Field order here is the JSON contract order; it must stay stable so
/// repeated CI runs over identical inputs emit identical documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaRecord {
    pub sites_total: IntMetric,
    pub instrumented: IntMetric,
    pub uninstrumented: IntMetric,
    pub score: FloatMetric,
    pub grade: GradePair,
    pub coverage_pct: FloatMetric,
}

/// A call site present in head, uninstrumented, and absent from base.
/// `line` is carried as text since producers emit it both ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSite {
    pub file: String,
    pub line: String,
    pub call: String,
    pub provider: String,
}

/// Machine-readable comparison result, the `--json` output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    pub delta: DeltaRecord,
    pub new_uninstrumented_sites: Vec<NewSite>,
    pub regressed: bool,
}

impl DeltaReport {
    /// Assemble the report; `regressed` is derived, never supplied.
    pub fn new(delta: DeltaRecord, new_uninstrumented_sites: Vec<NewSite>) -> Self {
        let regressed = delta.score.delta < 0.0;
        Self {
            delta,
            new_uninstrumented_sites,
            regressed,
        }
    }
}
