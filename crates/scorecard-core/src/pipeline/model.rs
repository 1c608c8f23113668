use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::json::{int_field, str_field};

/// Scan summary kept per repository in the combined results file.
/// Extracted from raw `assay scan` output; absent fields default so a
/// partially filled summary never fails the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub sites_total: i64,
    pub instrumented: i64,
    pub uninstrumented: i64,
    pub scan_status: String,
}

impl ScanSummary {
    pub fn from_scan_output(raw: &Value) -> Self {
        let summary = raw.get("summary");
        Self {
            sites_total: int_field(summary, "sites_total"),
            instrumented: int_field(summary, "instrumented"),
            uninstrumented: int_field(summary, "uninstrumented"),
            scan_status: str_field(Some(raw), "scan_status", "unknown"),
        }
    }
}

/// Score summary kept per repository, with the scorer's raw breakdown
/// carried opaquely for the per-repo report pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub score: f64,
    pub grade: String,
    pub breakdown: Value,
}

impl ScoreSummary {
    pub fn from_score_output(raw: &Value) -> Self {
        Self {
            score: raw.get("score").and_then(Value::as_f64).unwrap_or(0.0),
            grade: str_field(Some(raw), "grade", "F"),
            breakdown: raw.get("breakdown").cloned().unwrap_or(Value::Null),
        }
    }
}

/// One repository's pipeline outcome. Every stage is optional; a repo
/// that failed to clone still gets an entry with `error` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub repo: String,
    pub category: String,
    pub scanned_at: String,
    pub stars: Option<u64>,
    pub scan: Option<ScanSummary>,
    pub score: Option<ScoreSummary>,
    pub report_path: Option<String>,
    pub error: Option<String>,
}

/// The combined results document, `site/data/results.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsFile {
    pub generated_at: String,
    pub assay_version: String,
    pub repo_count: usize,
    #[serde(default)]
    pub results: Vec<RepoEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scan_summary_reads_summary_block() {
        let raw = json!({
            "summary": {"sites_total": 12, "instrumented": 4, "uninstrumented": 8},
            "scan_status": "pass",
        });
        let summary = ScanSummary::from_scan_output(&raw);
        assert_eq!(summary.sites_total, 12);
        assert_eq!(summary.instrumented, 4);
        assert_eq!(summary.uninstrumented, 8);
        assert_eq!(summary.scan_status, "pass");
    }

    #[test]
    fn scan_summary_defaults_when_fields_absent() {
        let summary = ScanSummary::from_scan_output(&json!({}));
        assert_eq!(summary.sites_total, 0);
        assert_eq!(summary.scan_status, "unknown");
    }

    #[test]
    fn score_summary_defaults_grade_to_f() {
        let summary = ScoreSummary::from_score_output(&json!({"score": 33.5}));
        assert_eq!(summary.score, 33.5);
        assert_eq!(summary.grade, "F");
        assert_eq!(summary.breakdown, Value::Null);
    }

    #[test]
    fn score_summary_carries_breakdown_opaquely() {
        let raw = json!({"score": 10.0, "grade": "D", "breakdown": {"receipts": 2}});
        let summary = ScoreSummary::from_score_output(&raw);
        assert_eq!(summary.breakdown["receipts"], 2);
    }

    #[test]
    fn results_file_serde_round_trip() {
        let file = ResultsFile {
            generated_at: "2026-08-07T00:00:00+00:00".into(),
            assay_version: "1.5.3".into(),
            repo_count: 1,
            results: vec![RepoEntry {
                repo: "owner/name".into(),
                category: "framework".into(),
                scanned_at: "2026-08-07T00:00:00+00:00".into(),
                stars: Some(1200),
                scan: Some(ScanSummary::from_scan_output(&json!({
                    "summary": {"sites_total": 3, "instrumented": 1, "uninstrumented": 2}
                }))),
                score: None,
                report_path: Some("reports/owner_name.html".into()),
                error: None,
            }],
        };

        let text = serde_json::to_string_pretty(&file).unwrap();
        let parsed: ResultsFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, file);
    }
}
