//! One-shot retention pass: resolve the config, freeze the cutoff, walk the
//! configured directories, delete (or preview) every stale match, report.
//!
//! Usage:
//!   filepruner [--config <FILE>] [--dry-run]
//!
//! Without `--config` the path falls back to `$FILEPRUNER_CONFIG`, then to
//! `./filepruner.toml`. `FILEPRUNER_DRY_RUN=true` enables dry-run as well.
//! Diagnostics are controlled through `RUST_LOG`.

use clap::Parser;
use filepruner::cli::Cli;
use filepruner::config::Config;
use filepruner::{PruneOptions, PrunePolicy, prune};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();

    let dry_run = cli.dry_run_enabled();

    let config_path = match Config::resolve_path(cli.config.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error resolving config path: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Using config file: {}", config_path.display());
    if dry_run {
        println!("Dry run mode is enabled. No files will be deleted.");
    }

    // Config and duration failures are the only fatal paths — everything
    // encountered during traversal is downgraded to a log line
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let policy = match PrunePolicy::new(&config, chrono::Local::now()) {
        Ok(policy) => policy,
        Err(e) => {
            eprintln!("Invalid delete_after duration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = prune(&config, &policy, &PruneOptions::new().dry_run(dry_run));
    result.report(dry_run);

    ExitCode::SUCCESS
}
