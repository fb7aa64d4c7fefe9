//! Directory traversal that tolerates bad entries.
//!
//! Metadata is gathered at scan time — re-statting files later introduces
//! TOCTOU races where files may change between scan and action.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Metadata snapshot for one regular file, taken during the walk.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// Final extension including the leading dot, or `None` when the name
    /// has no extension.
    pub extension: Option<String>,
    /// Last-modified timestamp.
    pub modified: DateTime<Local>,
    /// Size in bytes — feeds the freed-space summary, never the predicate.
    pub len: u64,
}

/// Collects every regular file under `root`, depth-first.
///
/// A failure on the root itself fails the whole walk. A failure on a
/// descendant entry (permission error, race with a concurrent deletion,
/// broken symlink) is logged and that entry skipped; siblings continue.
/// Symlinks are not followed.
pub(super) fn collect_files(root: &Path) -> Result<Vec<FileEntry>, walkdir::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => {
                log::warn!("skipping unreadable entry under {}: {err}", root.display());
                continue;
            }
        };

        // Directories are traversed into but never evaluated
        if entry.file_type().is_dir() {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                log::warn!("cannot stat {}: {err}", entry.path().display());
                continue;
            }
        };
        let modified = match metadata.modified() {
            Ok(modified) => DateTime::<Local>::from(modified),
            Err(err) => {
                log::warn!(
                    "no modification time for {}: {err}",
                    entry.path().display()
                );
                continue;
            }
        };

        files.push(FileEntry {
            path: entry.path().to_path_buf(),
            extension: extension_of(entry.path()),
            modified,
            len: metadata.len(),
        });
    }

    log::debug!("found {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Extension from the final dot of the file name, leading dot included,
/// matching the configured form. Dotfiles keep their full name: a file
/// named `.log` matches a `.log` filter.
fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    name.rfind('.').map(|idx| name[idx..].to_string())
}
