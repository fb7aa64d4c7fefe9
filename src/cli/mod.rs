//! Command-line surface: a config-path override and a dry-run toggle.
//!
//! Both flags have environment-variable counterparts. The config path falls
//! back to `FILEPRUNER_CONFIG`; dry-run combines flag and
//! `FILEPRUNER_DRY_RUN` with OR, so either source alone enables it.

use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Environment variable that enables dry-run when set to `"true"`.
pub const DRY_RUN_ENV: &str = "FILEPRUNER_DRY_RUN";

/// filepruner - delete files past a configured age.
#[derive(Debug, Parser)]
#[command(
    name = "filepruner",
    version,
    about = "Deletes files whose age exceeds the configured retention threshold"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report files that would be deleted without removing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Flag OR `FILEPRUNER_DRY_RUN=true` — neither source overrides the
    /// other, so an environment-enabled dry-run cannot be switched off from
    /// the command line.
    #[must_use]
    pub fn dry_run_enabled(&self) -> bool {
        self.dry_run || env::var(DRY_RUN_ENV).is_ok_and(|v| v == "true")
    }
}
