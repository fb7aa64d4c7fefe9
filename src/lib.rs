#![forbid(unsafe_code)]

//! `filepruner` - retention-policy file pruner.
//!
//! Given a set of directories, a file-extension allow-list, and a maximum
//! age, one pass walks each directory tree and deletes every file whose
//! last-modified timestamp predates "now minus threshold". Dry-run mode
//! reports the intended deletions without touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use filepruner::{Config, PruneOptions, PrunePolicy, prune};
//!
//! let config = Config {
//!     directories: vec!["/var/log/myapp".into()],
//!     file_types: vec![".log".into()],
//!     delete_after: "7d".into(),
//! };
//!
//! let policy = PrunePolicy::new(&config, chrono::Local::now())?;
//! let result = prune(&config, &policy, &PruneOptions::new().dry_run(true));
//! println!("{} file(s) past retention", result.count());
//! # Ok::<(), filepruner::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `filepruner` command-line binary

// Core modules (always available)
pub mod config;
pub mod duration;
pub mod error;
pub mod prune;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use duration::parse_retention;
pub use error::Error;
pub use prune::{PruneOptions, PrunePolicy, PruneResult, format_size, prune};
