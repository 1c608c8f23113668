//! HTML assembly for the static scorecard site.
//!
//! Everything here is a pure function of the results document plus fixed
//! constants, so rebuilding from the same results.json is deterministic.
//! Rows are sorted case-insensitively by repository name.

use crate::SITE_URL;
use crate::pipeline::model::{RepoEntry, ResultsFile};
use crate::util::num::group_thousands;

pub fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "#22c55e",
        "B" => "#84cc16",
        "C" => "#eab308",
        "D" => "#f97316",
        "F" => "#ef4444",
        _ => "#6b7280",
    }
}

pub fn grade_bg(grade: &str) -> &'static str {
    match grade {
        "A" => "#052e16",
        "B" => "#1a2e05",
        "C" => "#2e2505",
        "D" => "#2e1505",
        "F" => "#2e0505",
        _ => "#1f2937",
    }
}

const STYLE: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0d1117; color: #c9d1d9; line-height: 1.6; }
.container { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
h1 { font-size: 1.75rem; color: #f0f6fc; margin-bottom: 0.5rem; }
.subtitle { color: #8b949e; margin-bottom: 2rem; }
.meta { color: #6e7681; font-size: 0.8rem; margin-bottom: 1.5rem; }
table { width: 100%; border-collapse: collapse; font-size: 0.9rem; }
th { text-align: left; padding: 0.75rem 0.5rem; border-bottom: 2px solid #30363d; color: #8b949e; font-weight: 600; font-size: 0.8rem; text-transform: uppercase; }
td { padding: 0.6rem 0.5rem; border-bottom: 1px solid #21262d; }
tr:hover { background: #161b22; }
.num { text-align: right; font-variant-numeric: tabular-nums; }
.grade { display: inline-block; padding: 0.15rem 0.5rem; border-radius: 4px; font-weight: 700; }
a { color: #58a6ff; text-decoration: none; }
a:hover { text-decoration: underline; }
.report-link { font-size: 0.8rem; color: #8b949e; }
.cta { margin-top: 2rem; padding: 1.25rem; background: #161b22; border: 1px solid #30363d; border-radius: 8px; }
.cta code { background: #0d1117; padding: 0.2rem 0.4rem; border-radius: 4px; }
.footer { margin-top: 3rem; padding-top: 1rem; border-top: 1px solid #21262d; color: #6e7681; font-size: 0.8rem; }
.footer a { color: #6e7681; }
";

/// One scorecard table row.
pub fn build_row(entry: &RepoEntry) -> String {
    let scan = entry.scan.as_ref();
    let sites = scan.map(|s| s.sites_total).unwrap_or(0);
    let instrumented = scan.map(|s| s.instrumented).unwrap_or(0);

    let (score, grade) = entry
        .score
        .as_ref()
        .map(|s| (s.score, s.grade.as_str()))
        .unwrap_or((0.0, "?"));

    let coverage = if sites > 0 {
        format!("{instrumented}/{sites}")
    } else {
        "0/0".to_string()
    };

    let stars = match entry.stars {
        Some(stars) if stars > 0 => group_thousands(stars),
        _ => "?".to_string(),
    };

    let report_link = entry
        .report_path
        .as_deref()
        .map(|path| format!("<a href=\"{path}\" class=\"report-link\">View Report</a>"))
        .unwrap_or_default();

    format!(
        "<tr>\n      <td><a href=\"https://github.com/{repo}\" target=\"_blank\" rel=\"noopener\">{repo}</a></td>\n      <td class=\"num\">{stars}</td>\n      <td class=\"num\">{sites}</td>\n      <td class=\"num\">{coverage}</td>\n      <td class=\"num\"><span class=\"grade\" style=\"background:{bg};color:{color}\">{grade}</span> {score:.0}</td>\n      <td>{report_link}</td>\n    </tr>",
        repo = entry.repo,
        bg = grade_bg(grade),
        color = grade_color(grade),
    )
}

/// The scorecard index page.
pub fn build_html(data: &ResultsFile) -> String {
    let mut results: Vec<&RepoEntry> = data.results.iter().collect();
    results.sort_by_key(|r| r.repo.to_lowercase());

    let count = results.len();
    let generated = data
        .generated_at
        .get(..10)
        .unwrap_or(data.generated_at.as_str());
    let rows: Vec<String> = results.iter().map(|r| build_row(r)).collect();

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <title>AI Evidence Readiness Scorecard</title>\n");
    out.push_str("  <meta name=\"description\" content=\"How much of your AI system's behavior is independently verifiable? Evidence readiness scores for top AI repositories.\">\n");
    out.push_str(&format!(
        "  <meta property=\"og:title\" content=\"AI Evidence Readiness Scorecard\">\n  <meta property=\"og:description\" content=\"Evidence readiness scores for {count} top AI repositories.\">\n  <meta property=\"og:type\" content=\"website\">\n  <meta property=\"og:url\" content=\"{SITE_URL}\">\n"
    ));
    out.push_str("  <style>\n");
    out.push_str(STYLE);
    out.push_str("  </style>\n</head>\n<body>\n  <div class=\"container\">\n");
    out.push_str("    <h1>AI Evidence Readiness Scorecard</h1>\n");
    out.push_str(
        "    <p class=\"subtitle\">How much of your AI system's behavior is independently verifiable?</p>\n",
    );
    out.push_str(&format!(
        "    <p class=\"meta\">{count} repos scanned with <a href=\"https://pypi.org/project/assay-ai/\">assay-ai</a> v{version} &middot; Last updated: {generated} &middot; <a href=\"methodology.html\">How we score</a></p>\n",
        version = data.assay_version,
    ));
    out.push_str("    <table id=\"scorecard\">\n      <thead>\n        <tr>\n          <th>Repository</th>\n          <th>Stars</th>\n          <th>Call Sites</th>\n          <th>Instrumented</th>\n          <th>Score</th>\n          <th>Report</th>\n        </tr>\n      </thead>\n      <tbody>\n        ");
    out.push_str(&rows.join("\n        "));
    out.push_str("\n      </tbody>\n    </table>\n");
    out.push_str(
        "    <div class=\"cta\">\n      <strong>Check your own repo:</strong><br>\n      <code>pip install assay-ai && assay scan . && assay score .</code>\n    </div>\n",
    );
    out.push_str(
        "    <div class=\"footer\">\n      <p>\n        <a href=\"https://github.com/Haserjian/assay-scorecard\">Source</a>\n        &middot; <a href=\"methodology.html\">Methodology</a>\n        &middot; Powered by <a href=\"https://pypi.org/project/assay-ai/\">Assay</a>\n      </p>\n    </div>\n  </div>\n</body>\n</html>\n",
    );
    out
}

/// Wrap the methodology markdown in a minimal readable page.
pub fn wrap_methodology(content: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <title>Scoring Methodology - AI Evidence Readiness Scorecard</title>\n");
    out.push_str("  <style>\n");
    out.push_str(
        "body { font-family: -apple-system, BlinkMacSystemFont, sans-serif; background: #0d1117; color: #c9d1d9; line-height: 1.8; max-width: 720px; margin: 0 auto; padding: 2rem 1rem; }\na { color: #58a6ff; }\npre { white-space: pre-wrap; }\n",
    );
    out.push_str("  </style>\n</head>\n<body>\n");
    out.push_str("  <p><a href=\"index.html\">&larr; Back to Scorecard</a></p>\n");
    out.push_str(&format!("  <pre>{content}</pre>\n"));
    out.push_str("</body>\n</html>\n");
    out
}
