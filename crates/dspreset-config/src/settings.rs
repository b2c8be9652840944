//! Catalog loader settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Where the loader finds presets, relative to the configuration directory.
///
/// Every field has a default, so an empty TOML document is valid.
///
/// # TOML Format
///
/// ```toml
/// current_file = "dspconfig"
/// current_name = "current"
/// presets_subdir = "presets/dsp"
/// preset_extension = ".txt"
/// sort_entries = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderSettings {
    /// File holding the live configuration, with enabled flags.
    pub current_file: String,

    /// Name given to the live configuration in the catalog.
    pub current_name: String,

    /// Directory holding named presets, `/`-separated.
    pub presets_subdir: String,

    /// Suffix selecting named preset files. Stripped to form the name.
    pub preset_extension: String,

    /// Load named presets in lexicographic order of their relative path
    /// instead of enumeration order.
    pub sort_entries: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            current_file: "dspconfig".to_string(),
            current_name: "current".to_string(),
            presets_subdir: "presets/dsp".to_string(),
            preset_extension: ".txt".to_string(),
            sort_entries: true,
        }
    }
}

impl LoaderSettings {
    /// Load settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load settings from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Preset name for a directory entry, or `None` if the entry does not
    /// carry the preset extension.
    pub fn preset_name<'a>(&self, entry: &'a str) -> Option<&'a str> {
        entry.strip_suffix(self.preset_extension.as_str())
    }
}
