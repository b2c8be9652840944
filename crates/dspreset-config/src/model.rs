//! In-memory preset data model.

use serde::{Deserialize, Serialize};

/// One processing unit instance within a preset.
///
/// Items are raw parameter values addressed by position. A node may carry
/// fewer items than its unit expects (written by an older unit version) or
/// more (written by a newer one); [`Node::resolve_items`] reconciles both.
///
/// # Example
///
/// ```rust
/// use dspreset_config::Node;
///
/// let node = Node::new("src").with_item("48000");
///
/// assert_eq!(node.item(0), Some("48000"));
/// assert_eq!(node.item_or(1, "2"), "2");
/// assert_eq!(node.resolve_items(&["44100", "2", "0"]), vec!["48000", "2", "0"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    /// Unit type identifier, opaque to the parser.
    #[serde(rename = "type")]
    pub unit_type: String,

    /// Enabled flag. Only the current-config layout carries one, and only a
    /// non-`0` flag sets it. `None` is "not applicable", not "disabled".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Display name resolved through the unit registry when the node was
    /// added interactively. Parsed nodes leave it unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw parameter values in position order.
    #[serde(default)]
    pub items: Vec<String>,
}

impl Node {
    /// Create a node with no flag and no items.
    pub fn new(unit_type: impl Into<String>) -> Self {
        Self {
            unit_type: unit_type.into(),
            enabled: None,
            name: None,
            items: Vec::new(),
        }
    }

    /// Set the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a parameter value at the next position.
    pub fn with_item(mut self, value: impl Into<String>) -> Self {
        self.items.push(value.into());
        self
    }

    /// Append several parameter values.
    pub fn with_items<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(values.into_iter().map(Into::into));
        self
    }

    /// True only when the source explicitly enabled the unit.
    pub fn is_enabled(&self) -> bool {
        self.enabled == Some(true)
    }

    /// Raw value at `position`, if the preset recorded one.
    pub fn item(&self, position: usize) -> Option<&str> {
        self.items.get(position).map(String::as_str)
    }

    /// Raw value at `position`, or `default` for positions past the end.
    pub fn item_or<'a>(&'a self, position: usize, default: &'a str) -> &'a str {
        self.item(position).unwrap_or(default)
    }

    /// Values for exactly `defaults.len()` positions.
    ///
    /// Missing trailing positions take the matching default; surplus
    /// trailing items are dropped.
    pub fn resolve_items<S: AsRef<str>>(&self, defaults: &[S]) -> Vec<String> {
        defaults
            .iter()
            .enumerate()
            .map(|(i, default)| self.item_or(i, default.as_ref()).to_string())
            .collect()
    }

    /// Number of recorded parameter values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the node recorded no parameter values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A named, ordered collection of nodes.
///
/// Node order is processing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Units in processing order.
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Preset {
    /// Create an empty preset.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Create a preset from parsed nodes.
    pub fn with_nodes(name: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }

    /// Append a node.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Get the number of nodes in the preset.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the preset is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by index.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Iterate over nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Unit types in processing order.
    pub fn unit_types(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.unit_type.as_str()).collect()
    }
}

/// Ordered set of presets.
///
/// The first preset is the current one only when the live configuration was
/// loaded; without it the catalog holds named presets alone.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    presets: Vec<Preset>,
    #[serde(skip)]
    has_current: bool,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a preset.
    pub(crate) fn push(&mut self, preset: Preset) {
        self.presets.push(preset);
    }

    /// Install the live configuration at index 0.
    pub(crate) fn set_current(&mut self, preset: Preset) {
        if self.has_current {
            self.presets[0] = preset;
        } else {
            self.presets.insert(0, preset);
            self.has_current = true;
        }
    }

    /// True if index 0 holds the live configuration.
    pub fn has_current(&self) -> bool {
        self.has_current
    }

    /// The live configuration, if one was loaded.
    pub fn current(&self) -> Option<&Preset> {
        if self.has_current {
            self.presets.first()
        } else {
            None
        }
    }

    pub(crate) fn current_mut(&mut self) -> Option<&mut Preset> {
        if self.has_current {
            self.presets.first_mut()
        } else {
            None
        }
    }

    /// All presets, current first.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Get a preset by index.
    pub fn get(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    /// First preset with the given name.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Iterate over presets.
    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True if nothing has been loaded.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new() {
        let node = Node::new("eq");
        assert_eq!(node.unit_type, "eq");
        assert!(node.enabled.is_none());
        assert!(node.name.is_none());
        assert!(node.is_empty());
        assert!(!node.is_enabled());
    }

    #[test]
    fn test_node_enabled_states() {
        assert!(Node::new("a").with_enabled(true).is_enabled());
        assert!(!Node::new("a").with_enabled(false).is_enabled());
    }

    #[test]
    fn test_item_or_past_end() {
        let node = Node::new("comp").with_items(["-12", "3"]);
        assert_eq!(node.item_or(0, "x"), "-12");
        assert_eq!(node.item_or(5, "x"), "x");
        assert_eq!(node.item(2), None);
    }

    #[test]
    fn test_resolve_items_pads_short_nodes() {
        let node = Node::new("reverb").with_item("0.9");
        let resolved = node.resolve_items(&["0.5", "0.5", "0.3"]);
        assert_eq!(resolved, vec!["0.9", "0.5", "0.3"]);
    }

    #[test]
    fn test_resolve_items_drops_surplus() {
        let node = Node::new("gain").with_items(["3", "extra", "more"]);
        assert_eq!(node.resolve_items(&["0"]), vec!["3"]);
    }

    #[test]
    fn test_resolve_items_keeps_empty_values() {
        let node = Node::new("m2s").with_items(["", "0.7"]);
        assert_eq!(node.resolve_items(&["1", "1"]), vec!["", "0.7"]);
    }

    #[test]
    fn test_preset_accessors() {
        let mut preset = Preset::new("Live");
        preset.push(Node::new("eq"));
        preset.push(Node::new("comp"));

        assert_eq!(preset.len(), 2);
        assert_eq!(preset.unit_types(), vec!["eq", "comp"]);
        assert_eq!(preset.get(1).map(|n| n.unit_type.as_str()), Some("comp"));
        assert!(preset.get(2).is_none());
    }

    #[test]
    fn test_catalog_current_is_first() {
        let mut catalog = Catalog::new();
        assert!(catalog.current().is_none());

        catalog.push(Preset::new("saved"));
        assert!(catalog.current().is_none(), "a named preset is never current");
        assert!(!catalog.has_current());

        catalog.set_current(Preset::new("current"));

        assert_eq!(catalog.len(), 2);
        assert!(catalog.has_current());
        assert_eq!(catalog.current().unwrap().name, "current");
        assert_eq!(catalog.find("saved").unwrap().name, "saved");
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_set_current_replaces_existing() {
        let mut catalog = Catalog::new();
        catalog.set_current(Preset::new("old"));
        catalog.push(Preset::new("saved"));
        catalog.set_current(Preset::new("new"));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.current().unwrap().name, "new");
    }

    #[test]
    fn test_node_json_shape() {
        let node = Node::new("eq").with_enabled(true).with_item("1");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "eq", "enabled": true, "items": ["1"] })
        );
    }
}
