//! Error types for preset parsing and catalog operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A preset file is malformed
    #[error("invalid preset '{path}': {source}")]
    InvalidPreset {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Where and why parsing stopped.
        #[source]
        source: FormatError,
    },

    /// The catalog was already populated
    #[error("catalog already loaded ({presets} presets)")]
    AlreadyLoaded {
        /// Number of presets present when the load was attempted.
        presets: usize,
    },

    /// A mutation needs the current preset but none was loaded
    #[error("no current preset loaded: units can only be added to the live configuration")]
    NoCurrentPreset,

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry name is not valid UTF-8
    #[error("entry name is not valid UTF-8: '{}'", path.display())]
    NonUtf8Path {
        /// Path of the offending entry.
        path: PathBuf,
    },

    /// Writing presets back to disk is not implemented
    #[error("saving presets is not supported")]
    SaveUnsupported,

    /// Preset index does not exist in the catalog
    #[error("preset index {index} out of range (catalog has {len} presets)")]
    PresetIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Catalog length.
        len: usize,
    },

    /// Failed to parse loader settings
    #[error("failed to parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create an invalid preset error.
    pub fn invalid_preset(path: impl Into<PathBuf>, source: FormatError) -> Self {
        ConfigError::InvalidPreset {
            path: path.into(),
            source,
        }
    }

    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }
}
