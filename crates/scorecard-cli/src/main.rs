use anyhow::Result;
use clap::Parser;

use scorecard_core::delta::compute::{compute_delta, find_new_uninstrumented};
use scorecard_core::delta::load::load_document;
use scorecard_core::delta::model::DeltaReport;
use scorecard_core::delta::render::render_markdown;
use scorecard_core::pipeline::runner::{self, RunDirs};
use scorecard_core::pipeline::targets::{self, Target};
use scorecard_core::site::assemble;

mod args;

// Delta exit codes: 1 is the explicit fail-on-regression policy,
// 3 is a missing or unparseable input document.
const EXIT_REGRESSION: i32 = 1;
const EXIT_BAD_INPUT: i32 = 3;

fn main() {
    let args = args::Args::parse();

    let code = match args.command {
        args::Command::Delta(delta_args) => run_delta(&delta_args),
        args::Command::Scan(scan_args) => exit_code(run_scan(&scan_args)),
        args::Command::Site(site_args) => {
            exit_code(assemble::build_site(&site_args.site_dir, &site_args.methodology))
        }
    };

    std::process::exit(code);
}

fn exit_code(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    }
}

fn run_delta(args: &args::DeltaArgs) -> i32 {
    let base = match load_document(&args.base_json) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_BAD_INPUT;
        }
    };
    let head = match load_document(&args.head_json) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_BAD_INPUT;
        }
    };

    let delta = match compute_delta(&base, &head) {
        Ok(delta) => delta,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_BAD_INPUT;
        }
    };
    let new_sites = find_new_uninstrumented(&base, &head);
    let report = DeltaReport::new(delta, new_sites);

    let output = if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(mut text) => {
                text.push('\n');
                text
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return EXIT_BAD_INPUT;
            }
        }
    } else {
        render_markdown(&report.delta, &report.new_uninstrumented_sites)
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &output) {
                eprintln!("Error: failed to write {}: {e}", path.display());
                return 1;
            }
        }
        None => print!("{output}"),
    }

    if args.fail_on_regression && report.regressed {
        return EXIT_REGRESSION;
    }
    0
}

fn run_scan(args: &args::ScanArgs) -> Result<()> {
    let targets = match &args.repo {
        Some(repo) => vec![Target::manual(repo)],
        None => targets::load_targets(&args.targets, args.limit)?,
    };

    let dirs = RunDirs::new(args.site_dir.clone(), args.workdir.clone());
    runner::run(&targets, &dirs)?;
    Ok(())
}
