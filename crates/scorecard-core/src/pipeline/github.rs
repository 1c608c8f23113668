//! Process wrappers for repository access: `git` for cloning and the
//! `gh` CLI for star counts. Both are best effort; a failure is logged
//! and the pipeline moves on.

use std::path::Path;
use std::process::Command;

/// Shallow-clone the default branch of `owner/name` into `dest`.
pub fn clone_repo(repo: &str, dest: &Path) -> bool {
    let url = format!("https://github.com/{repo}.git");
    match Command::new("git")
        .args(["clone", "--depth", "1", "--single-branch", &url])
        .arg(dest)
        .output()
    {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            eprintln!("  CLONE FAILED: {repo}: {}", stderr.trim());
            false
        }
        Err(e) => {
            eprintln!("  CLONE FAILED: {repo}: {e}");
            false
        }
    }
}

/// Star count via the `gh` CLI. No authentication handling; any failure
/// (missing binary, rate limit, unknown repo) yields `None`.
pub fn fetch_stars(repo: &str) -> Option<u64> {
    let output = Command::new("gh")
        .args(["api", &format!("repos/{repo}"), "--jq", ".stargazers_count"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    String::from_utf8_lossy(&output.stdout).trim().parse().ok()
}
