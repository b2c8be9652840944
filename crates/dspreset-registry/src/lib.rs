//! Unit registry for dspreset processing chains.
//!
//! A preset only records opaque unit-type identifiers. This crate provides
//! the capability that turns those identifiers into something a user can
//! read: the list of available unit types, their display names, and the
//! default value for each parameter position.
//!
//! # Features
//!
//! - **Registry Trait**: [`UnitRegistry`] is the seam the preset controller
//!   consumes, so hosts can plug in their own plugin list
//! - **Built-in Units**: [`StaticRegistry::builtin`] describes the stock units
//! - **Defaults**: descriptors carry per-position defaults for presets that
//!   were written by an older unit version
//!
//! # Example
//!
//! ```rust
//! use dspreset_registry::{StaticRegistry, UnitRegistry};
//!
//! let registry = StaticRegistry::builtin();
//!
//! for unit_type in registry.list_types() {
//!     println!("{unit_type}: {:?}", registry.name_for_type(&unit_type));
//! }
//!
//! assert_eq!(registry.name_for_type("eq").as_deref(), Some("Equalizer"));
//! assert_eq!(registry.name_for_type("nonexistent"), None);
//! ```

/// Category of processing unit for organization and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Dynamics processing (compressor, limiter)
    Dynamics,
    /// Equalizers and filters
    Filter,
    /// Sample rate and channel layout conversion
    Conversion,
    /// Time-based effects (delay, reverb)
    TimeBased,
    /// Gain stages and other utilities
    Utility,
}

impl UnitCategory {
    /// Returns a human-readable name for the category.
    pub const fn name(&self) -> &'static str {
        match self {
            UnitCategory::Dynamics => "Dynamics",
            UnitCategory::Filter => "Filter",
            UnitCategory::Conversion => "Conversion",
            UnitCategory::TimeBased => "Time-Based",
            UnitCategory::Utility => "Utility",
        }
    }
}

/// Describes a processing unit type.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDescriptor {
    /// Type identifier as written in preset files.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Category for organization.
    pub category: UnitCategory,
    /// Default raw value for each parameter position, in order.
    pub defaults: Vec<String>,
}

impl UnitDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: UnitCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            defaults: Vec::new(),
        }
    }

    /// Set the per-position parameter defaults.
    pub fn with_defaults<I, S>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.defaults = defaults.into_iter().map(Into::into).collect();
        self
    }

    /// Number of parameter positions the unit currently expects.
    pub fn param_count(&self) -> usize {
        self.defaults.len()
    }
}

/// Lookup capability for processing unit types.
///
/// The preset controller only needs these two operations; everything else a
/// host knows about its plugins stays on the host side.
pub trait UnitRegistry: Send + Sync {
    /// All available unit type identifiers, in registration order.
    fn list_types(&self) -> Vec<String>;

    /// Display name for a unit type, or `None` if the type is not registered.
    fn name_for_type(&self, unit_type: &str) -> Option<String>;

    /// Full descriptor for a unit type, if the registry has one.
    fn descriptor(&self, unit_type: &str) -> Option<UnitDescriptor> {
        let _ = unit_type;
        None
    }
}

/// Registry backed by an in-memory list of descriptors.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: Vec<UnitDescriptor>,
}

impl StaticRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with all built-in units registered.
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: Vec::with_capacity(6),
        };
        registry.register_builtin_units();
        registry
    }

    /// Register all built-in units.
    fn register_builtin_units(&mut self) {
        // 18-band graphic equalizer, preamp first
        self.register(
            UnitDescriptor::new("eq", "Equalizer", UnitCategory::Filter)
                .with_defaults(std::iter::repeat_n("0", 19)),
        );

        self.register(
            UnitDescriptor::new("comp", "Compressor", UnitCategory::Dynamics)
                .with_defaults(["-18", "4", "10", "100", "0"]),
        );

        // samplerate, quality, auto samplerate
        self.register(
            UnitDescriptor::new("src", "Resampler", UnitCategory::Conversion)
                .with_defaults(["44100", "2", "0"]),
        );

        self.register(
            UnitDescriptor::new("m2s", "Mono to stereo", UnitCategory::Conversion)
                .with_defaults(["1", "1"]),
        );

        self.register(
            UnitDescriptor::new("reverb", "Reverb", UnitCategory::TimeBased)
                .with_defaults(["0.5", "0.5", "0.3", "1"]),
        );

        self.register(
            UnitDescriptor::new("gain", "Gain", UnitCategory::Utility).with_defaults(["0"]),
        );
    }

    /// Register a unit type. A later registration with the same id shadows
    /// the earlier one for lookups but both stay listed.
    pub fn register(&mut self, descriptor: UnitDescriptor) {
        self.entries.push(descriptor);
    }

    /// Add a unit type and return the registry.
    pub fn with_unit(mut self, descriptor: UnitDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Returns descriptors for all registered units.
    pub fn all_units(&self) -> &[UnitDescriptor] {
        &self.entries
    }

    /// Returns descriptors for units in a specific category.
    pub fn units_in_category(&self, category: UnitCategory) -> Vec<&UnitDescriptor> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Get a descriptor by unit type.
    pub fn get(&self, id: &str) -> Option<&UnitDescriptor> {
        self.entries.iter().rev().find(|e| e.id == id)
    }

    /// Returns the number of registered units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no units are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UnitRegistry for StaticRegistry {
    fn list_types(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    fn name_for_type(&self, unit_type: &str) -> Option<String> {
        self.get(unit_type).map(|e| e.name.clone())
    }

    fn descriptor(&self, unit_type: &str) -> Option<UnitDescriptor> {
        self.get(unit_type).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = StaticRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_list_types_in_registration_order() {
        let registry = StaticRegistry::builtin();
        assert_eq!(
            registry.list_types(),
            vec!["eq", "comp", "src", "m2s", "reverb", "gain"]
        );
    }

    #[test]
    fn test_name_for_type() {
        let registry = StaticRegistry::builtin();

        assert_eq!(registry.name_for_type("src").as_deref(), Some("Resampler"));
        assert!(registry.name_for_type("nonexistent").is_none());
    }

    #[test]
    fn test_units_by_category() {
        let registry = StaticRegistry::builtin();

        let conversion = registry.units_in_category(UnitCategory::Conversion);
        assert_eq!(conversion.len(), 2); // Resampler, Mono to stereo

        let filter = registry.units_in_category(UnitCategory::Filter);
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(UnitCategory::TimeBased.name(), "Time-Based");
        assert_eq!(UnitCategory::Conversion.name(), "Conversion");
    }

    #[test]
    fn test_descriptor_defaults() {
        let registry = StaticRegistry::builtin();

        let eq = registry.get("eq").unwrap();
        assert_eq!(eq.param_count(), 19);
        assert!(eq.defaults.iter().all(|d| d == "0"));

        let src = registry.descriptor("src").unwrap();
        assert_eq!(src.defaults, vec!["44100", "2", "0"]);
    }

    #[test]
    fn test_custom_registry_shadows_duplicates() {
        let registry = StaticRegistry::new()
            .with_unit(UnitDescriptor::new("x", "Old", UnitCategory::Utility))
            .with_unit(UnitDescriptor::new("x", "New", UnitCategory::Utility));

        assert_eq!(registry.list_types(), vec!["x", "x"]);
        assert_eq!(registry.name_for_type("x").as_deref(), Some("New"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = StaticRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list_types().is_empty());
        assert!(registry.descriptor("eq").is_none());
    }
}
