//! Configuration directory resolution.
//!
//! The catalog loader never hard-codes where presets live. It asks a
//! [`PathResolver`] for the host's configuration directory and joins the
//! locations from [`LoaderSettings`](crate::LoaderSettings) onto it.
//!
//! # Directory Structure
//!
//! - **Config dir**: `~/.config/dspreset/` (Linux), `~/Library/Application Support/dspreset/` (macOS), `%APPDATA%\dspreset\` (Windows)
//! - **Current preset**: `<config dir>/dspconfig`
//! - **Named presets**: `<config dir>/presets/dsp/**/*.txt`
//!
//! # Example
//!
//! ```rust,no_run
//! use dspreset_config::paths::{DefaultPaths, PathResolver};
//!
//! let dir = DefaultPaths.config_directory();
//! println!("Config: {:?}", dir);
//! ```

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "dspreset";

/// Capability that locates the host's configuration directory.
pub trait PathResolver: Send + Sync {
    /// Absolute path of the configuration directory.
    fn config_directory(&self) -> PathBuf;
}

/// Platform configuration directory joined with the application name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPaths;

impl PathResolver for DefaultPaths {
    fn config_directory(&self) -> PathBuf {
        user_config_dir()
    }
}

/// A fixed configuration directory, for overrides and tests.
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl FixedPath {
    /// Create a resolver that always returns `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl PathResolver for FixedPath {
    fn config_directory(&self) -> PathBuf {
        self.0.clone()
    }
}

/// Returns the user-specific configuration directory.
///
/// # Platform Paths
///
/// - Linux: `~/.config/dspreset/`
/// - macOS: `~/Library/Application Support/dspreset/`
/// - Windows: `%APPDATA%\dspreset\`
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Join a `/`-separated relative location onto `base`.
///
/// Settings and enumerated entries always use `/`; this keeps them portable.
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(base.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_config_dir() {
        let dir = user_config_dir();
        assert!(dir.to_string_lossy().contains("dspreset"));
    }

    #[test]
    fn test_default_paths_matches_user_config_dir() {
        assert_eq!(DefaultPaths.config_directory(), user_config_dir());
    }

    #[test]
    fn test_fixed_path() {
        let resolver = FixedPath::new("/opt/host/config");
        assert_eq!(
            resolver.config_directory(),
            PathBuf::from("/opt/host/config")
        );
    }

    #[test]
    fn test_join_relative() {
        let base = Path::new("/cfg");
        assert_eq!(
            join_relative(base, "presets/dsp"),
            Path::new("/cfg").join("presets").join("dsp")
        );
        assert_eq!(join_relative(base, "dspconfig"), Path::new("/cfg/dspconfig"));
        assert_eq!(join_relative(base, ""), Path::new("/cfg"));
    }
}
