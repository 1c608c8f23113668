//! Writes the static site artifacts from a persisted results file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::SITE_URL;
use crate::pipeline::model::ResultsFile;
use crate::site::html;

/// Sitemap covering the index, the methodology page, and every per-repo
/// report the pipeline produced.
pub fn build_sitemap(data: &ResultsFile) -> String {
    let mut urls = vec![
        format!("  <url><loc>{SITE_URL}/</loc></url>"),
        format!("  <url><loc>{SITE_URL}/methodology.html</loc></url>"),
    ];
    for entry in &data.results {
        if let Some(path) = &entry.report_path {
            urls.push(format!("  <url><loc>{SITE_URL}/{path}</loc></url>"));
        }
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>\n",
        urls.join("\n")
    )
}

pub fn build_robots() -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {SITE_URL}/sitemap.xml\n")
}

/// Assemble the site under `site_dir` from `site_dir/data/results.json`.
///
/// The methodology page is only built when its markdown source exists;
/// a missing results file is a user-facing error since it means the scan
/// has not run yet.
pub fn build_site(site_dir: &Path, methodology: &Path) -> Result<()> {
    let data_path = site_dir.join("data").join("results.json");
    let text = fs::read_to_string(&data_path).with_context(|| {
        format!(
            "no results file at {}; run the scan first",
            data_path.display()
        )
    })?;
    let data: ResultsFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", data_path.display()))?;

    let index_path = site_dir.join("index.html");
    fs::write(&index_path, html::build_html(&data))
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    println!("Built {}", index_path.display());

    if methodology.exists() {
        let content = fs::read_to_string(methodology)
            .with_context(|| format!("failed to read {}", methodology.display()))?;
        let methodology_path = site_dir.join("methodology.html");
        fs::write(&methodology_path, html::wrap_methodology(&content))
            .with_context(|| format!("failed to write {}", methodology_path.display()))?;
        println!("Built {}", methodology_path.display());
    }

    let sitemap_path = site_dir.join("sitemap.xml");
    fs::write(&sitemap_path, build_sitemap(&data))
        .with_context(|| format!("failed to write {}", sitemap_path.display()))?;
    println!("Built {}", sitemap_path.display());

    let robots_path = site_dir.join("robots.txt");
    fs::write(&robots_path, build_robots())
        .with_context(|| format!("failed to write {}", robots_path.display()))?;
    println!("Built {}", robots_path.display());

    Ok(())
}
