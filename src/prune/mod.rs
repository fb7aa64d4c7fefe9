//! Retention enforcement: walk each configured directory, evaluate every
//! file against the frozen policy, and delete (or preview) the matches.

mod options;
mod policy;
mod result;
mod walk;

pub use options::PruneOptions;
pub use policy::PrunePolicy;
pub use result::{PruneResult, format_size};

use crate::config::Config;
use std::fs;
use walk::collect_files;

/// Format used for the modification time in action notices.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Runs one retention pass over every configured directory.
///
/// Fully sequential: one directory at a time, one file at a time.
/// Directories are processed in configuration order. A directory whose walk
/// fails is recorded and skipped; a file whose deletion fails is recorded
/// and skipped. Neither stops the rest of the run — only config loading and
/// duration parsing may abort the process, and both happen before this is
/// called.
///
/// Non-matching files are skipped silently; each match produces one notice
/// line on stdout.
#[must_use]
pub fn prune(config: &Config, policy: &PrunePolicy, options: &PruneOptions) -> PruneResult {
    log::debug!(
        "pruning files modified before {}",
        policy.cutoff().format(TIMESTAMP_FORMAT)
    );

    let mut result = PruneResult::default();

    for dir in config.expanded_directories() {
        let files = match collect_files(&dir) {
            Ok(files) => files,
            Err(err) => {
                log::error!("cannot walk {}: {err}", dir.display());
                result
                    .skipped_dirs
                    .push((dir.display().to_string(), err.to_string()));
                continue;
            }
        };

        for entry in files {
            if !policy.matches(entry.extension.as_deref(), entry.modified) {
                continue;
            }

            let path = entry.path.display().to_string();
            let stamp = entry.modified.format(TIMESTAMP_FORMAT);

            if options.dry_run {
                println!("[dry-run] would delete {path} (modified {stamp})");
                result.would_delete.push(path);
                result.would_free += entry.len;
            } else {
                // Notice first, then the attempt — mirrors the order a user
                // sees when a deletion fails halfway through a run
                println!("deleting {path} (modified {stamp})");
                match fs::remove_file(&entry.path) {
                    Ok(()) => {
                        result.deleted.push(path);
                        result.freed += entry.len;
                    }
                    Err(err) => {
                        log::warn!("cannot delete {path}: {err}");
                        result.failed.push((path, err.to_string()));
                    }
                }
            }
        }
    }

    result
}
