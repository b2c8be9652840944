//! Preset catalog management for dspreset processing chains.
//!
//! A preset records, in processing order, which units a chain runs, whether
//! each one is enabled, and the raw parameter values each unit needs to
//! restore its state. This crate parses the preset text format, loads the
//! live configuration plus every named preset into a catalog, and appends
//! units to the live configuration.
//!
//! # Features
//!
//! - **Text Format**: Parse and render the brace-delimited preset format
//! - **Data Model**: Presets, nodes and positional items with defaults for
//!   values a preset did not record
//! - **Catalog Loading**: Discover presets through injected path, directory
//!   and registry capabilities
//! - **Settings**: Override file locations from a TOML file
//!
//! # Example
//!
//! ```rust,no_run
//! use dspreset_config::{DefaultPaths, PresetController};
//! use dspreset_registry::StaticRegistry;
//!
//! let mut controller = PresetController::new(StaticRegistry::builtin(), DefaultPaths);
//! controller.load().unwrap();
//!
//! if let Some(current) = controller.current() {
//!     for node in current.iter() {
//!         println!("{} enabled={}", node.unit_type, node.is_enabled());
//!     }
//! }
//! ```

mod controller;
mod error;
mod model;
mod settings;

pub mod enumerate;
pub mod format;
pub mod paths;

pub use controller::{AllowAll, MISSING_UNIT_NAME, PresetController, PresetPolicy};
pub use enumerate::{DirectoryEnumerator, WalkDirEnumerator};
pub use error::ConfigError;
pub use format::{FormatError, FormatErrorKind};
pub use model::{Catalog, Node, Preset};
pub use paths::{DefaultPaths, FixedPath, PathResolver, user_config_dir};
pub use settings::LoaderSettings;

/// Re-export commonly used types from dspreset-registry
pub use dspreset_registry::{StaticRegistry, UnitCategory, UnitDescriptor, UnitRegistry};
