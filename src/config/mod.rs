//! TOML configuration loading and config-file path resolution.
//!
//! The config is read once per run and immutable afterwards; the walker and
//! executor receive it by reference rather than through any global state.

use crate::error::Error;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "FILEPRUNER_CONFIG";

/// Fixed default config filename, looked up in the working directory first.
pub const DEFAULT_CONFIG_FILE: &str = "filepruner.toml";

/// A config file may omit any field — `#[serde(default)]` turns absences into
/// empty values. An empty `file_types` makes every predicate vacuously false;
/// an empty `delete_after` fails the duration parse before traversal starts.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Root directories to scan. A directory that does not exist is a
    /// per-directory runtime error, not a load-time validation failure.
    pub directories: Vec<String>,
    /// Eligible extensions, leading dot included (e.g. `".log"`). Matched
    /// case-sensitively and exactly.
    pub file_types: Vec<String>,
    /// Retention threshold, in either the `"7d"` shorthand or the compound
    /// `"2h30m"` grammar.
    pub delete_after: String,
}

impl Config {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    /// A missing or unreadable file is an error here, unlike a missing scan
    /// directory later — nothing should be deleted on a half-loaded config.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        log::debug!(
            "config: {} directories, {} file types, delete_after='{}'",
            config.directories.len(),
            config.file_types.len(),
            config.delete_after
        );
        Ok(config)
    }

    /// Resolves which config file to use: the explicit flag, then the
    /// `FILEPRUNER_CONFIG` environment variable, then `filepruner.toml` in
    /// the working directory, then the per-user config location.
    ///
    /// The returned path may not exist — `load_from` reports that as a fatal
    /// error with the actual I/O failure attached.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory and no
    /// earlier source supplied a path.
    pub fn resolve_path(flag: Option<&Path>) -> Result<PathBuf, Error> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }

        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }

        let fallback = directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("filepruner").join(DEFAULT_CONFIG_FILE))
            .ok_or(Error::ConfigDirNotFound)?;
        if fallback.exists() {
            Ok(fallback)
        } else {
            Ok(local)
        }
    }

    /// Configured directories with `~` expanded to the user's home directory.
    #[must_use]
    pub fn expanded_directories(&self) -> Vec<PathBuf> {
        self.directories
            .iter()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
            .collect()
    }
}
