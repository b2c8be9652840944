//! Preset directory enumeration.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::ConfigError;

/// Capability that lists the entries of a presets directory.
pub trait DirectoryEnumerator: Send + Sync {
    /// Relative paths of every entry under `dir`, using `/` as separator.
    ///
    /// A missing directory yields nothing. No ordering is implied.
    fn entries(&self, dir: &Path) -> Result<Vec<String>, ConfigError>;
}

/// Recursive filesystem enumerator.
///
/// Yields regular files and symlinks; symlinks are not followed, so a
/// dangling link still surfaces and fails when it is read. Any walk error
/// or non-UTF-8 entry name aborts the listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkDirEnumerator;

impl DirectoryEnumerator for WalkDirEnumerator {
    fn entries(&self, dir: &Path) -> Result<Vec<String>, ConfigError> {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "presets directory absent");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = entry.map_err(|err| {
                let path = err.path().unwrap_or(dir).to_path_buf();
                ConfigError::read_file(path, io::Error::from(err))
            })?;

            let file_type = entry.file_type();
            if !(file_type.is_file() || file_type.is_symlink()) {
                continue;
            }

            let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
            let parts = relative
                .components()
                .map(|c| c.as_os_str().to_str())
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| ConfigError::NonUtf8Path {
                    path: entry.path().to_path_buf(),
                })?;
            entries.push(parts.join("/"));
        }
        Ok(entries)
    }
}
