use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Evidence readiness scorecard: scan pipeline, static site, and PR score deltas"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare scan/score output from two revisions
    Delta(DeltaArgs),
    /// Clone and scan the tracked repositories
    Scan(ScanArgs),
    /// Assemble the static site from collected results
    Site(SiteArgs),
}

#[derive(Debug, clap::Args)]
pub struct DeltaArgs {
    /// Path to base revision scan/score JSON
    #[arg(long)]
    pub base_json: PathBuf,

    /// Path to head revision scan/score JSON
    #[arg(long)]
    pub head_json: PathBuf,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit structured JSON instead of markdown
    #[arg(long)]
    pub json: bool,

    /// Exit 1 if the score decreased
    #[arg(long)]
    pub fail_on_regression: bool,
}

#[derive(Debug, clap::Args)]
pub struct ScanArgs {
    /// Tracked repository list
    #[arg(long, default_value = "repos.yaml")]
    pub targets: PathBuf,

    /// Scan only the first N repos
    #[arg(long)]
    pub limit: Option<usize>,

    /// Scan a single repo (owner/name)
    #[arg(long)]
    pub repo: Option<String>,

    /// Site output directory
    #[arg(long, default_value = "site")]
    pub site_dir: PathBuf,

    /// Scratch directory for clones
    #[arg(long, default_value = "workdir")]
    pub workdir: PathBuf,
}

#[derive(Debug, clap::Args)]
pub struct SiteArgs {
    /// Site output directory holding data/results.json
    #[arg(long, default_value = "site")]
    pub site_dir: PathBuf,

    /// Methodology page source
    #[arg(long, default_value = "methodology.md")]
    pub methodology: PathBuf,
}
