//! Run-mode options, separate from the engine so callers can construct a
//! policy without importing filesystem internals.

/// Defaults to a live run, matching a bare invocation of the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PruneOptions {
    /// Report intended deletions without performing any filesystem mutation.
    pub dry_run: bool,
}

impl PruneOptions {
    /// A live run until dry-run is switched on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Destructive operations need a preview mode.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
