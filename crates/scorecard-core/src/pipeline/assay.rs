//! Invocation of the external `assay` scanner.
//!
//! The scanner is a black box: this module shells out, captures stdout,
//! and parses whatever JSON it printed. Per-repo failures are reported on
//! stderr and surfaced as `None`; they must never abort a whole run.

use std::fs;
use std::path::Path;
use std::process::Command;

use serde_json::Value;

/// Run `assay scan . --json` in `repo_dir`.
///
/// The scanner exits nonzero when uninstrumented sites are found. That is
/// a scan result, not a failure, so only the stdout payload decides the
/// outcome here.
pub fn run_scan(repo_dir: &Path) -> Option<Value> {
    run_json(repo_dir, "scan")
}

/// Run `assay score . --json` in `repo_dir`.
pub fn run_score(repo_dir: &Path) -> Option<Value> {
    run_json(repo_dir, "score")
}

fn run_json(repo_dir: &Path, subcommand: &str) -> Option<Value> {
    let label = subcommand.to_uppercase();
    let output = match Command::new("assay")
        .arg(subcommand)
        .arg(".")
        .arg("--json")
        .current_dir(repo_dir)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            eprintln!("  {label} FAILED: {e}");
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(e) => {
            eprintln!("  {label} FAILED: {e}");
            None
        }
    }
}

/// Run `assay scan . --report` and copy the emitted HTML report to `dest`.
///
/// The scanner writes `evidence_gap_report.html` into the scanned
/// directory; absence after a run means the report stage produced
/// nothing for this repo.
pub fn run_report(repo_dir: &Path, dest: &Path) -> bool {
    if let Err(e) = Command::new("assay")
        .args(["scan", ".", "--report"])
        .current_dir(repo_dir)
        .output()
    {
        eprintln!("  REPORT FAILED: {e}");
        return false;
    }

    let report_src = repo_dir.join("evidence_gap_report.html");
    if !report_src.exists() {
        return false;
    }

    match fs::copy(&report_src, dest) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("  REPORT FAILED: {e}");
            false
        }
    }
}
