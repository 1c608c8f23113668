use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// One entry from the tracked-repository list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// `owner/name` form.
    pub repo: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "unknown".to_string()
}

impl Target {
    /// Ad hoc single-repo target, used by the CLI `--repo` override.
    pub fn manual(repo: &str) -> Self {
        Self {
            repo: repo.to_string(),
            category: "manual".to_string(),
        }
    }

    /// Filesystem-safe name: `owner/name` becomes `owner_name`.
    pub fn slug(&self) -> String {
        self.repo.replace('/', "_")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TargetList {
    #[serde(default)]
    targets: Vec<Target>,
}

/// Load the target list, keeping only the first `limit` entries when set.
pub fn load_targets(path: &Path, limit: Option<usize>) -> Result<Vec<Target>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read target list: {}", path.display()))?;
    let list: TargetList = serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse target list: {}", path.display()))?;

    let mut targets = list.targets;
    if let Some(limit) = limit {
        targets.truncate(limit);
    }
    Ok(targets)
}
