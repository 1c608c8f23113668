//! Delta computation between two scan+score documents.
//!
//! Both entry points are pure: same inputs, same outputs, no side
//! effects. Field-level absence is always defaulted; only a top-level
//! shape violation (not a JSON object) is an error.

use std::collections::HashSet;

use serde_json::Value;

use crate::delta::error::InputError;
use crate::delta::model::{DeltaRecord, FloatMetric, GradePair, IntMetric, NewSite};
use crate::delta::normalize;
use crate::util::json::text_field;
use crate::util::num::round1;

/// Readability cap on the new-uninstrumented listing. This is an
/// order-preserving prefix, not a ranked selection.
pub const MAX_NEW_SITES: usize = 10;

/// Compute per-metric before/after/delta triples for `head` against `base`.
pub fn compute_delta(base: &Value, head: &Value) -> Result<DeltaRecord, InputError> {
    if !base.is_object() {
        return Err(InputError::NotAnObject { side: "base" });
    }
    if !head.is_object() {
        return Err(InputError::NotAnObject { side: "head" });
    }

    let b = normalize::scan_counts(base);
    let h = normalize::scan_counts(head);
    let b_score = normalize::score_fields(base);
    let h_score = normalize::score_fields(head);

    let coverage_base = coverage_pct(b.instrumented, b.sites_total);
    let coverage_head = coverage_pct(h.instrumented, h.sites_total);

    Ok(DeltaRecord {
        sites_total: IntMetric::new(b.sites_total, h.sites_total),
        instrumented: IntMetric::new(b.instrumented, h.instrumented),
        uninstrumented: IntMetric::new(b.uninstrumented, h.uninstrumented),
        score: FloatMetric {
            base: b_score.score,
            head: h_score.score,
            delta: round1(h_score.score - b_score.score),
        },
        grade: GradePair {
            base: b_score.grade,
            head: h_score.grade,
        },
        coverage_pct: FloatMetric {
            base: coverage_base,
            head: coverage_head,
            delta: round1(coverage_head - coverage_base),
        },
    })
}

/// Instrumented/total as a one-decimal percentage.
/// Coverage of a zero-site scan is 0, not undefined.
fn coverage_pct(instrumented: i64, total: i64) -> f64 {
    if total > 0 {
        round1(instrumented as f64 / total as f64 * 100.0)
    } else {
        0.0
    }
}

/// List call sites that are uninstrumented in `head` and absent from
/// `base` by (file, line, call) identity, in head order, capped at
/// [`MAX_NEW_SITES`].
///
/// The base set is built regardless of instrumented flags, so a site
/// whose flag or provider merely changed between revisions is never
/// reported. Absent site lists read as empty; this never errors.
pub fn find_new_uninstrumented(base: &Value, head: &Value) -> Vec<NewSite> {
    let base_sites: HashSet<(String, String, String)> =
        normalize::sites(base).iter().map(site_identity).collect();

    let mut found = Vec::new();
    for site in normalize::sites(head) {
        if site
            .get("instrumented")
            .and_then(Value::as_bool)
            .unwrap_or(false)
        {
            continue;
        }
        if base_sites.contains(&site_identity(site)) {
            continue;
        }
        found.push(NewSite {
            file: text_field(site, "file", "unknown"),
            line: text_field(site, "line", "?"),
            call: text_field(site, "call", "unknown"),
            provider: text_field(site, "provider", "unknown"),
        });
        if found.len() == MAX_NEW_SITES {
            break;
        }
    }
    found
}

/// Value-comparable site key. Line numbers are normalized to text so
/// `10` and `"10"` from different producers identify the same site.
fn site_identity(site: &Value) -> (String, String, String) {
    (
        text_field(site, "file", ""),
        text_field(site, "line", ""),
        text_field(site, "call", ""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scan_score(
        sites_total: i64,
        instrumented: i64,
        uninstrumented: i64,
        score: f64,
        grade: &str,
        sites: Vec<Value>,
    ) -> Value {
        json!({
            "scan": {
                "summary": {
                    "sites_total": sites_total,
                    "instrumented": instrumented,
                    "uninstrumented": uninstrumented,
                },
                "sites": sites,
            },
            "score": {"score": score, "grade": grade},
        })
    }

    fn site(file: &str, line: i64, instrumented: bool) -> Value {
        json!({
            "file": file,
            "line": line,
            "call": "client.chat.completions.create",
            "provider": "openai",
            "instrumented": instrumented,
        })
    }

    #[test]
    fn identical_documents_have_zero_deltas() {
        let doc = scan_score(10, 5, 5, 17.5, "F", vec![]);
        let delta = compute_delta(&doc, &doc).unwrap();

        assert_eq!(delta.sites_total.delta, 0);
        assert_eq!(delta.instrumented.delta, 0);
        assert_eq!(delta.uninstrumented.delta, 0);
        assert_eq!(delta.score.delta, 0.0);
        assert_eq!(delta.coverage_pct.base, delta.coverage_pct.head);
    }

    #[test]
    fn score_delta_is_rounded_head_minus_base() {
        let base = scan_score(10, 5, 5, 10.0, "F", vec![]);
        let head = scan_score(10, 5, 5, 25.0, "F", vec![]);
        assert_eq!(compute_delta(&base, &head).unwrap().score.delta, 15.0);
        assert_eq!(compute_delta(&head, &base).unwrap().score.delta, -15.0);

        let base = scan_score(10, 5, 5, 10.04, "F", vec![]);
        let head = scan_score(10, 5, 5, 10.0, "F", vec![]);
        assert_eq!(compute_delta(&base, &head).unwrap().score.delta, -0.0);
    }

    #[test]
    fn growth_scenario_matches_expected_metrics() {
        let base = scan_score(10, 5, 5, 10.0, "F", vec![]);
        let head = scan_score(15, 10, 5, 25.0, "F", vec![]);
        let delta = compute_delta(&base, &head).unwrap();

        assert_eq!(delta.sites_total.delta, 5);
        assert_eq!(delta.score.delta, 15.0);
        assert_eq!(delta.coverage_pct.base, 50.0);
        assert_eq!(delta.coverage_pct.head, 66.7);
    }

    #[test]
    fn zero_sites_means_zero_coverage() {
        let base = scan_score(0, 0, 0, 0.0, "F", vec![]);
        let head = scan_score(5, 0, 5, 0.0, "F", vec![]);
        let delta = compute_delta(&base, &head).unwrap();

        assert_eq!(delta.coverage_pct.base, 0.0);
        assert_eq!(delta.sites_total.delta, 5);

        // Zero total wins over any instrumented value.
        let odd = json!({"scan": {"summary": {"sites_total": 0, "instrumented": 7}}});
        assert_eq!(compute_delta(&odd, &odd).unwrap().coverage_pct.base, 0.0);
    }

    #[test]
    fn nested_and_flat_layouts_are_equivalent() {
        let nested = scan_score(10, 5, 5, 17.5, "F", vec![]);
        let flat = json!({
            "scan": {"sites_total": 10, "instrumented": 5, "uninstrumented": 5},
            "score": {"score": 17.5, "grade": "F"},
        });
        let a = compute_delta(&nested, &flat).unwrap();
        assert_eq!(a.sites_total.delta, 0);
        assert_eq!(a.instrumented.delta, 0);
        assert_eq!(a.score.delta, 0.0);
    }

    #[test]
    fn grade_pair_carries_both_sides() {
        let base = scan_score(10, 5, 5, 55.0, "F", vec![]);
        let head = scan_score(10, 5, 5, 75.0, "C", vec![]);
        let delta = compute_delta(&base, &head).unwrap();
        assert_eq!(delta.grade.base, "F");
        assert_eq!(delta.grade.head, "C");
    }

    #[test]
    fn missing_sections_default_instead_of_failing() {
        let empty = json!({});
        let delta = compute_delta(&empty, &empty).unwrap();
        assert_eq!(delta.sites_total.base, 0);
        assert_eq!(delta.score.base, 0.0);
        assert_eq!(delta.grade.base, "?");
        assert_eq!(delta.coverage_pct.base, 0.0);
    }

    #[test]
    fn non_object_input_is_rejected() {
        let ok = json!({});
        assert!(matches!(
            compute_delta(&json!([1, 2]), &ok),
            Err(InputError::NotAnObject { side: "base" })
        ));
        assert!(matches!(
            compute_delta(&ok, &json!("nope")),
            Err(InputError::NotAnObject { side: "head" })
        ));
    }

    #[test]
    fn new_uninstrumented_site_is_reported() {
        let base = scan_score(0, 0, 0, 0.0, "F", vec![]);
        let head = scan_score(1, 0, 1, 0.0, "F", vec![site("new.py", 10, false)]);

        let new = find_new_uninstrumented(&base, &head);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].file, "new.py");
        assert_eq!(new[0].line, "10");
        assert_eq!(new[0].provider, "openai");
    }

    #[test]
    fn site_present_in_both_is_never_reported() {
        let base = scan_score(1, 1, 0, 0.0, "F", vec![site("app.py", 42, true)]);
        // Same identity, but flag and provider changed between revisions.
        let mut changed = site("app.py", 42, false);
        changed["provider"] = json!("anthropic");
        let head = scan_score(1, 0, 1, 0.0, "F", vec![changed]);

        assert!(find_new_uninstrumented(&base, &head).is_empty());
    }

    #[test]
    fn instrumented_head_sites_are_excluded() {
        let base = scan_score(0, 0, 0, 0.0, "F", vec![]);
        let head = scan_score(1, 1, 0, 0.0, "F", vec![site("app.py", 42, true)]);
        assert!(find_new_uninstrumented(&base, &head).is_empty());
    }

    #[test]
    fn output_is_capped_at_ten_in_head_order() {
        let sites: Vec<Value> = (0..20)
            .map(|i| site(&format!("f{i}.py"), i, false))
            .collect();
        let base = scan_score(0, 0, 0, 0.0, "F", vec![]);
        let head = scan_score(20, 0, 20, 0.0, "F", sites);

        let new = find_new_uninstrumented(&base, &head);
        assert_eq!(new.len(), MAX_NEW_SITES);
        assert_eq!(new[0].file, "f0.py");
        assert_eq!(new[9].file, "f9.py");
    }

    #[test]
    fn line_identity_matches_across_numeric_and_text_encodings() {
        let base = json!({"sites": [{"file": "a.py", "line": "10", "call": "x"}]});
        let head = json!({"sites": [
            {"file": "a.py", "line": 10, "call": "x", "instrumented": false}
        ]});
        assert!(find_new_uninstrumented(&base, &head).is_empty());
    }

    #[test]
    fn empty_scan_data_yields_no_sites() {
        let base = json!({"scan": {}, "score": {}});
        let head = json!({"scan": {}, "score": {}});
        assert!(find_new_uninstrumented(&base, &head).is_empty());
    }

    #[test]
    fn missing_site_fields_get_placeholders() {
        let base = json!({});
        let head = json!({"sites": [{"instrumented": false}]});
        let new = find_new_uninstrumented(&base, &head);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].file, "unknown");
        assert_eq!(new[0].line, "?");
        assert_eq!(new[0].call, "unknown");
        assert_eq!(new[0].provider, "unknown");
    }

    #[test]
    fn top_level_sites_fallback_is_honored() {
        let base = json!({"sites": [site("old.py", 1, false)]});
        let head = json!({"sites": [site("old.py", 1, false), site("new.py", 2, false)]});
        let new = find_new_uninstrumented(&base, &head);
        assert_eq!(new.len(), 1);
        assert_eq!(new[0].file, "new.py");
    }
}
