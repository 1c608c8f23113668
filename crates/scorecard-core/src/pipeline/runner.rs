//! Pipeline orchestration: clone, scan, score, report, persist.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::ASSAY_VERSION;
use crate::pipeline::model::{RepoEntry, ResultsFile, ScanSummary, ScoreSummary};
use crate::pipeline::targets::Target;
use crate::pipeline::{assay, github};

/// Output layout for a pipeline run.
#[derive(Debug, Clone)]
pub struct RunDirs {
    pub site_dir: PathBuf,
    pub workdir: PathBuf,
}

impl RunDirs {
    pub fn new(site_dir: PathBuf, workdir: PathBuf) -> Self {
        Self { site_dir, workdir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.site_dir.join("data")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.site_dir.join("reports")
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir().join("results.json")
    }

    fn ensure(&self) -> Result<()> {
        for dir in [self.data_dir(), self.reports_dir(), self.workdir.clone()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        Ok(())
    }
}

/// Scan a single repository and record whatever the tooling produced.
///
/// Stage failures leave their field `None` or set `error`; the entry
/// itself is always returned so one broken repo cannot sink a run.
pub fn scan_repo(target: &Target, dirs: &RunDirs) -> RepoEntry {
    println!("Scanning {}...", target.repo);

    let mut entry = RepoEntry {
        repo: target.repo.clone(),
        category: target.category.clone(),
        scanned_at: Utc::now().to_rfc3339(),
        stars: None,
        scan: None,
        score: None,
        report_path: None,
        error: None,
    };

    entry.stars = github::fetch_stars(&target.repo);

    // Stale clones from an aborted run must not pollute this one.
    let clone_dir = dirs.workdir.join(target.slug());
    if clone_dir.exists() {
        let _ = fs::remove_dir_all(&clone_dir);
    }

    if !github::clone_repo(&target.repo, &clone_dir) {
        entry.error = Some("clone_failed".to_string());
        return entry;
    }

    if let Some(raw) = assay::run_scan(&clone_dir) {
        entry.scan = Some(ScanSummary::from_scan_output(&raw));
    }
    if let Some(raw) = assay::run_score(&clone_dir) {
        entry.score = Some(ScoreSummary::from_score_output(&raw));
    }

    let report_name = format!("{}.html", target.slug());
    if assay::run_report(&clone_dir, &dirs.reports_dir().join(&report_name)) {
        entry.report_path = Some(format!("reports/{report_name}"));
    }

    let _ = fs::remove_dir_all(&clone_dir);

    let status = if entry.scan.is_some() {
        "ok"
    } else {
        "scan_failed"
    };
    println!("  {}: {status}", target.repo);
    entry
}

/// Run the pipeline over `targets` and persist the combined results.
pub fn run(targets: &[Target], dirs: &RunDirs) -> Result<ResultsFile> {
    dirs.ensure()?;

    println!(
        "Scanning {} repos (assay pinned to {ASSAY_VERSION})...\n",
        targets.len()
    );

    let results: Vec<RepoEntry> = targets.iter().map(|t| scan_repo(t, dirs)).collect();

    let file = ResultsFile {
        generated_at: Utc::now().to_rfc3339(),
        assay_version: ASSAY_VERSION.to_string(),
        repo_count: results.len(),
        results,
    };

    let path = dirs.results_path();
    let text = serde_json::to_string_pretty(&file)?;
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;

    let ok = file.results.iter().filter(|r| r.scan.is_some()).count();
    println!("\nResults written to {}", path.display());
    println!("Reports in {}/", dirs.reports_dir().display());
    println!(
        "Success: {ok}/{}  Failed: {}",
        file.results.len(),
        file.results.len() - ok
    );

    Ok(file)
}
