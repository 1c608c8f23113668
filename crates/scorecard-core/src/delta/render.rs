//! Markdown rendering of a delta record, shaped for PR comments.
//!
//! The output is byte-for-byte deterministic for identical inputs. CI
//! posts this repeatedly on the same revision pair and diffs the comment
//! body to decide whether to update it, so no locale-, time-, or
//! environment-dependent formatting is allowed here.

use crate::SITE_URL;
use crate::delta::model::{DeltaRecord, NewSite};

pub fn render_markdown(delta: &DeltaRecord, new_sites: &[NewSite]) -> String {
    let mut out = String::new();
    out.push_str("## Evidence Readiness Score Delta\n\n");

    out.push_str("| Metric | Base | Head | Delta |\n");
    out.push_str("|--------|------|------|-------|\n");

    let score = &delta.score;
    let qualifier = if score.delta > 0.0 {
        " [improved]"
    } else if score.delta < 0.0 {
        " [regressed]"
    } else {
        ""
    };
    out.push_str(&format!(
        "| **Score** | {:.1} | {:.1} | {:+.1}{} |\n",
        score.base, score.head, score.delta, qualifier
    ));

    let grade = &delta.grade;
    let transition = if grade.changed() {
        format!("{} -> {}", grade.base, grade.head)
    } else {
        grade.head.clone()
    };
    out.push_str(&format!(
        "| **Grade** | {} | {} | {} |\n",
        grade.base, grade.head, transition
    ));

    let sites = &delta.sites_total;
    out.push_str(&format!(
        "| Call Sites | {} | {} | {:+} |\n",
        sites.base, sites.head, sites.delta
    ));

    let instrumented = &delta.instrumented;
    out.push_str(&format!(
        "| Instrumented | {} | {} | {:+} |\n",
        instrumented.base, instrumented.head, instrumented.delta
    ));

    let uninstrumented = &delta.uninstrumented;
    out.push_str(&format!(
        "| Uninstrumented | {} | {} | {:+} |\n",
        uninstrumented.base, uninstrumented.head, uninstrumented.delta
    ));

    let coverage = &delta.coverage_pct;
    out.push_str(&format!(
        "| Coverage | {:.1}% | {:.1}% | {:+.1}% |\n",
        coverage.base, coverage.head, coverage.delta
    ));

    if !new_sites.is_empty() {
        out.push_str("\n### New Uninstrumented Call Sites\n\n");
        out.push_str("| File | Line | Call | Provider |\n");
        out.push_str("|------|------|------|----------|\n");
        for site in new_sites {
            out.push_str(&format!(
                "| `{}` | {} | `{}` | {} |\n",
                site.file, site.line, site.call, site.provider
            ));
        }
        out.push_str(
            "\n> Fix: `pip install assay-ai && assay patch .` to auto-instrument these sites.\n",
        );
    }

    out.push_str(&format!(
        "\n---\n*Generated by [Assay Scorecard]({SITE_URL}/) | [Methodology]({SITE_URL}/methodology.html)*\n"
    ));

    out
}
