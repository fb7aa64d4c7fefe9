//! Per-file eligibility: extension allow-list plus age cutoff.

use crate::config::Config;
use crate::duration::parse_retention;
use crate::error::Error;
use chrono::{DateTime, Local};
use std::collections::HashSet;

/// Frozen deletion predicate for one run.
///
/// The cutoff is computed once at construction; every comparison in the run
/// uses this single value, so a slow walk cannot shift eligibility mid-pass.
#[derive(Debug, Clone)]
pub struct PrunePolicy {
    file_types: HashSet<String>,
    cutoff: DateTime<Local>,
}

impl PrunePolicy {
    /// Builds the predicate from the loaded config and a frozen "now".
    ///
    /// # Errors
    /// Fails with `InvalidDuration` when `delete_after` matches neither
    /// grammar — surfaced here so a bad threshold aborts before any traversal.
    pub fn new(config: &Config, now: DateTime<Local>) -> Result<Self, Error> {
        let delta = parse_retention(&config.delete_after)?;
        Ok(Self {
            file_types: config.file_types.iter().cloned().collect(),
            cutoff: now - delta,
        })
    }

    /// The instant files must predate to be eligible.
    #[must_use]
    pub const fn cutoff(&self) -> DateTime<Local> {
        self.cutoff
    }

    /// True iff the extension is in the configured set and the modification
    /// time is strictly before the cutoff — a file modified exactly at the
    /// cutoff stays. Extension match is case-sensitive and includes the
    /// leading dot; files without an extension are never eligible.
    ///
    /// No other file attribute participates in the decision.
    #[must_use]
    pub fn matches(&self, extension: Option<&str>, modified: DateTime<Local>) -> bool {
        extension.is_some_and(|ext| self.file_types.contains(ext)) && modified < self.cutoff
    }
}
