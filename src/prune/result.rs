//! Outcome accounting for a prune run — split into actual vs dry-run fields
//! so callers can report or preview without separate code paths.

/// Structured outcome of one retention pass.
#[derive(Debug, Default)]
pub struct PruneResult {
    /// Successfully removed files.
    pub deleted: Vec<String>,
    /// Bytes reclaimed by deletion.
    pub freed: u64,
    /// Files a live run would have removed (dry-run only).
    pub would_delete: Vec<String>,
    /// Bytes a live run would have reclaimed (dry-run only).
    pub would_free: u64,
    /// Files whose deletion failed, with the reason. The run continued past
    /// each of these.
    pub failed: Vec<(String, String)>,
    /// Configured directories whose walk failed as a whole, with the reason.
    pub skipped_dirs: Vec<(String, String)>,
}

impl PruneResult {
    /// Unifies live and dry-run counts so callers don't branch on mode.
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.deleted.is_empty() {
            self.would_delete.len()
        } else {
            self.deleted.len()
        }
    }

    /// Unifies live and dry-run byte totals.
    #[must_use]
    pub const fn bytes(&self) -> u64 {
        if self.freed == 0 {
            self.would_free
        } else {
            self.freed
        }
    }

    /// Prints the end-of-run summary. Per-file notices were already emitted
    /// while the run progressed; this only adds the totals.
    pub fn report(&self, dry_run: bool) {
        if self.count() == 0 {
            println!("No files past retention.");
        } else if dry_run {
            println!(
                "Would delete {} file(s), freeing {}",
                self.would_delete.len(),
                format_size(self.would_free)
            );
        } else {
            println!(
                "Deleted {} file(s), freed {}",
                self.deleted.len(),
                format_size(self.freed)
            );
        }

        if !self.failed.is_empty() {
            println!("{} file(s) could not be deleted", self.failed.len());
        }
        if !self.skipped_dirs.is_empty() {
            println!("{} directory(ies) could not be scanned", self.skipped_dirs.len());
        }
    }
}

/// Raw byte counts are unreadable in terminal output.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.1} GB", bytes_f / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes_f / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes_f / 1024.0)
    } else {
        format!("{bytes} B")
    }
}
