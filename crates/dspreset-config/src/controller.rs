//! Preset catalog controller.
//!
//! [`PresetController`] owns the [`Catalog`] and is the only way to populate
//! or mutate it. It loads the live configuration and every named preset from
//! the configuration directory, and appends units to the live configuration
//! on behalf of an editor.
//!
//! # Example
//!
//! ```rust,no_run
//! use dspreset_config::{FixedPath, PresetController};
//! use dspreset_registry::StaticRegistry;
//!
//! let mut controller = PresetController::new(
//!     StaticRegistry::builtin(),
//!     FixedPath::new("/home/me/.config/dspreset"),
//! );
//! controller.load().unwrap();
//!
//! for preset in controller.presets() {
//!     println!("{}: {} units", preset.name, preset.len());
//! }
//!
//! controller.add_item("eq").unwrap();
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dspreset_registry::{UnitDescriptor, UnitRegistry};

use crate::enumerate::{DirectoryEnumerator, WalkDirEnumerator};
use crate::error::ConfigError;
use crate::format;
use crate::model::{Catalog, Node, Preset};
use crate::paths::{PathResolver, join_relative};
use crate::settings::LoaderSettings;

/// Display name used for unit types the registry does not know.
pub const MISSING_UNIT_NAME: &str = "<missing plugin>";

/// Per-preset editing policy consulted by the UI.
pub trait PresetPolicy: Send + Sync {
    /// Whether the preset at `index` may be edited.
    fn is_editable(&self, index: usize) -> bool {
        let _ = index;
        true
    }

    /// Whether the preset at `index` may be saved.
    fn is_saveable(&self, index: usize) -> bool {
        let _ = index;
        true
    }
}

/// Policy that allows editing and saving every preset.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PresetPolicy for AllowAll {}

/// Loads and mutates a catalog of unit-chain presets.
pub struct PresetController {
    catalog: Catalog,
    settings: LoaderSettings,
    registry: Box<dyn UnitRegistry>,
    paths: Box<dyn PathResolver>,
    enumerator: Box<dyn DirectoryEnumerator>,
    policy: Box<dyn PresetPolicy>,
}

impl PresetController {
    /// Create a controller with an empty catalog.
    ///
    /// Uses default [`LoaderSettings`], the filesystem enumerator and the
    /// [`AllowAll`] policy.
    pub fn new(
        registry: impl UnitRegistry + 'static,
        paths: impl PathResolver + 'static,
    ) -> Self {
        Self {
            catalog: Catalog::new(),
            settings: LoaderSettings::default(),
            registry: Box::new(registry),
            paths: Box::new(paths),
            enumerator: Box::new(WalkDirEnumerator),
            policy: Box::new(AllowAll),
        }
    }

    /// Replace the loader settings.
    pub fn with_settings(mut self, settings: LoaderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replace the directory enumerator.
    pub fn with_enumerator(mut self, enumerator: impl DirectoryEnumerator + 'static) -> Self {
        self.enumerator = Box::new(enumerator);
        self
    }

    /// Replace the editing policy.
    pub fn with_policy(mut self, policy: impl PresetPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Configuration directory reported by the path resolver.
    pub fn config_dir(&self) -> PathBuf {
        self.paths.config_directory()
    }

    /// Path of the live configuration file.
    pub fn current_path(&self) -> PathBuf {
        join_relative(&self.config_dir(), &self.settings.current_file)
    }

    /// Directory holding named presets.
    pub fn presets_dir(&self) -> PathBuf {
        join_relative(&self.config_dir(), &self.settings.presets_subdir)
    }

    /// Populate the catalog.
    ///
    /// The live configuration becomes the first preset if its file exists.
    /// Named presets follow, one per file with the preset extension. Loading
    /// stops at the first failing file and keeps what was loaded before it.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::AlreadyLoaded`] if the catalog is not empty
    /// - [`ConfigError::InvalidPreset`] if a file is malformed
    /// - [`ConfigError::ReadFile`] if the live configuration exists but cannot
    ///   be read, or if any enumerated entry cannot be read
    /// - [`ConfigError::NonUtf8Path`] if an entry name is not valid UTF-8
    pub fn load(&mut self) -> Result<(), ConfigError> {
        if !self.catalog.is_empty() {
            return Err(ConfigError::AlreadyLoaded {
                presets: self.catalog.len(),
            });
        }

        let current_path = self.current_path();
        match std::fs::read_to_string(&current_path) {
            Ok(content) => {
                let nodes = parse_preset(&current_path, &content, true)?;
                tracing::debug!(path = %current_path.display(), nodes = nodes.len(), "loaded current preset");
                self.catalog
                    .set_current(Preset::with_nodes(self.settings.current_name.clone(), nodes));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %current_path.display(), "no current preset");
            }
            Err(e) => return Err(ConfigError::read_file(current_path, e)),
        }

        let dir = self.presets_dir();
        let mut entries = self.enumerator.entries(&dir)?;
        if self.settings.sort_entries {
            entries.sort();
        }

        for entry in &entries {
            let Some(name) = self.settings.preset_name(entry) else {
                continue;
            };
            let path = join_relative(&dir, entry);
            let content =
                std::fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
            let nodes = parse_preset(&path, &content, false)?;
            tracing::debug!(preset = name, nodes = nodes.len(), "loaded preset");
            self.catalog.push(Preset::with_nodes(name, nodes));
        }

        tracing::info!(
            presets = self.catalog.len(),
            dir = %dir.display(),
            "preset catalog loaded"
        );
        Ok(())
    }

    /// Write the catalog back to the live configuration file and the named
    /// preset files.
    ///
    /// Not implemented: always returns [`ConfigError::SaveUnsupported`].
    pub fn save(&self) -> Result<(), ConfigError> {
        Err(ConfigError::SaveUnsupported)
    }

    /// Write a single preset back to its source location.
    ///
    /// Not implemented: returns [`ConfigError::PresetIndexOutOfRange`] for a
    /// bad index and [`ConfigError::SaveUnsupported`] otherwise.
    pub fn save_preset(&self, index: usize) -> Result<(), ConfigError> {
        if index >= self.catalog.len() {
            return Err(ConfigError::PresetIndexOutOfRange {
                index,
                len: self.catalog.len(),
            });
        }
        Err(ConfigError::SaveUnsupported)
    }

    /// Append a unit to the current preset.
    ///
    /// The node starts with no enabled flag and no items; its display name
    /// comes from the registry, or [`MISSING_UNIT_NAME`] for unknown types.
    /// Named presets are never targeted, even when one sits at index 0.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoCurrentPreset`] if the live configuration was not
    /// loaded.
    pub fn add_item(&mut self, unit_type: &str) -> Result<(), ConfigError> {
        let name = self.item_name(unit_type);
        let current = self
            .catalog
            .current_mut()
            .ok_or(ConfigError::NoCurrentPreset)?;

        tracing::debug!(unit_type, name = %name, position = current.len(), "add unit");
        current.push(Node::new(unit_type).with_name(name));
        Ok(())
    }

    /// Whether the UI may edit the preset at `index`.
    pub fn is_editable(&self, index: usize) -> bool {
        self.policy.is_editable(index)
    }

    /// Whether the UI may save the preset at `index`.
    pub fn is_saveable(&self, index: usize) -> bool {
        self.policy.is_saveable(index)
    }

    /// Unit types that can be added, in registry order.
    pub fn item_types(&self) -> Vec<String> {
        self.registry.list_types()
    }

    /// Display name for a unit type.
    pub fn item_name(&self, unit_type: &str) -> String {
        self.registry
            .name_for_type(unit_type)
            .unwrap_or_else(|| MISSING_UNIT_NAME.to_string())
    }

    /// Registry description of a unit type.
    pub fn item_descriptor(&self, unit_type: &str) -> Option<UnitDescriptor> {
        self.registry.descriptor(unit_type)
    }

    /// Per-position defaults for a unit type, if the registry describes it.
    pub fn item_defaults(&self, unit_type: &str) -> Option<Vec<String>> {
        self.item_descriptor(unit_type).map(|d| d.defaults)
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All presets, current first.
    pub fn presets(&self) -> &[Preset] {
        self.catalog.presets()
    }

    /// Get a preset by index.
    pub fn preset(&self, index: usize) -> Option<&Preset> {
        self.catalog.get(index)
    }

    /// The live configuration, if one was loaded.
    pub fn current(&self) -> Option<&Preset> {
        self.catalog.current()
    }

    /// First preset with the given name.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.catalog.find(name)
    }

    /// Number of presets in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// True if nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Active loader settings.
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }
}

fn parse_preset(
    path: &Path,
    content: &str,
    has_enabled_flag: bool,
) -> Result<Vec<Node>, ConfigError> {
    format::parse(content, has_enabled_flag).map_err(|e| ConfigError::invalid_preset(path, e))
}
