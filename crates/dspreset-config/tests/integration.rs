//! Integration tests for dspreset-config.
//!
//! Tests cover loading a realistic configuration directory, editing the live
//! configuration, and reading items through registry defaults.

use std::fs;
use std::path::Path;

use dspreset_config::{
    ConfigError, FixedPath, FormatErrorKind, LoaderSettings, Node, PresetController,
    StaticRegistry, UnitCategory, UnitDescriptor, format,
};
use tempfile::TempDir;

const CURRENT: &str = "\
eq 1 {
0
3.5
-2
}

src 0 {
48000
1
}
";

/// Lay out a configuration directory the way a host writes it.
fn config_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("dspconfig"), CURRENT).unwrap();

    let presets = dir.path().join("presets").join("dsp");
    fs::create_dir_all(presets.join("live")).unwrap();
    fs::write(presets.join("bright.txt"), "eq {\n0\n6\n6\n}\n").unwrap();
    fs::write(presets.join("live").join("stage.txt"), "comp {\n-20\n}\ngain {\n}\n").unwrap();
    fs::write(presets.join("README"), "not a preset").unwrap();
    dir
}

fn load(dir: &Path) -> PresetController {
    let mut controller = PresetController::new(StaticRegistry::builtin(), FixedPath::new(dir));
    controller.load().expect("catalog should load");
    controller
}

/// Test the full catalog layout: current first, then named presets sorted.
#[test]
fn test_catalog_layout() {
    let dir = config_dir();
    let controller = load(dir.path());

    let names: Vec<_> = controller.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["current", "bright", "live/stage"]);

    let current = controller.current().unwrap();
    assert_eq!(current.unit_types(), vec!["eq", "src"]);
    assert!(current.nodes[0].is_enabled());
    assert!(!current.nodes[1].is_enabled());

    let stage = controller.find("live/stage").unwrap();
    assert_eq!(stage.unit_types(), vec!["comp", "gain"]);
    assert!(stage.iter().all(|n| n.enabled.is_none()));
}

/// Test that items read through registry defaults tolerate schema drift.
#[test]
fn test_items_resolved_against_defaults() {
    let dir = config_dir();
    let controller = load(dir.path());

    let src = &controller.current().unwrap().nodes[1];
    let defaults = controller.item_defaults("src").unwrap();
    assert_eq!(src.resolve_items(&defaults), vec!["48000", "1", "0"]);

    let comp = &controller.find("live/stage").unwrap().nodes[0];
    let defaults = controller.item_defaults("comp").unwrap();
    assert_eq!(comp.resolve_items(&defaults), vec!["-20", "4", "10", "100", "0"]);
}

/// Test editing the live configuration after loading.
#[test]
fn test_add_units_to_current() {
    let dir = config_dir();
    let mut controller = load(dir.path());

    for unit_type in controller.item_types() {
        controller.add_item(&unit_type).unwrap();
    }

    let current = controller.current().unwrap();
    assert_eq!(current.len(), 2 + 6);
    assert_eq!(current.nodes[2].name.as_deref(), Some("Equalizer"));
    assert!(current.nodes[2..].iter().all(|n| n.items.is_empty()));

    // named presets untouched
    assert_eq!(controller.find("bright").unwrap().len(), 1);
}

/// Test that a host-specific registry is used for names and defaults.
#[test]
fn test_custom_registry() {
    let dir = config_dir();
    let registry = StaticRegistry::new().with_unit(
        UnitDescriptor::new("src", "Host Resampler", UnitCategory::Conversion)
            .with_defaults(["96000"]),
    );
    let mut controller = PresetController::new(registry, FixedPath::new(dir.path()));
    controller.load().unwrap();

    assert_eq!(controller.item_types(), vec!["src"]);
    assert_eq!(controller.item_name("src"), "Host Resampler");
    assert_eq!(controller.item_name("eq"), "<missing plugin>");

    controller.add_item("eq").unwrap();
    assert_eq!(
        controller.current().unwrap().nodes.last().unwrap().name.as_deref(),
        Some("<missing plugin>")
    );
}

/// Test settings loaded from a TOML file redirect the loader.
#[test]
fn test_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("live"), "gain 1 {\n-3\n}\n").unwrap();
    fs::create_dir_all(dir.path().join("saved")).unwrap();
    fs::write(dir.path().join("saved").join("quiet.preset"), "gain {\n-20\n}\n").unwrap();

    let settings_path = dir.path().join("dspreset.toml");
    fs::write(
        &settings_path,
        r#"
current_file = "live"
current_name = "now"
presets_subdir = "saved"
preset_extension = ".preset"
"#,
    )
    .unwrap();

    let settings = LoaderSettings::load(&settings_path).unwrap();
    let mut controller = PresetController::new(StaticRegistry::builtin(), FixedPath::new(dir.path()))
        .with_settings(settings);
    controller.load().unwrap();

    let names: Vec<_> = controller.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["now", "quiet"]);
}

/// Test that a broken file in the presets directory reports its location.
#[test]
fn test_broken_named_preset_reports_path_and_line() {
    let dir = config_dir();
    let presets = dir.path().join("presets").join("dsp");
    fs::write(presets.join("broken.txt"), "eq {\n1\n}\neq 1 {\n}\n").unwrap();

    let mut controller = PresetController::new(StaticRegistry::builtin(), FixedPath::new(dir.path()));
    let err = controller.load().unwrap_err();

    match err {
        ConfigError::InvalidPreset { path, source } => {
            assert!(path.ends_with("broken.txt"));
            assert_eq!(source.line, 4);
            assert_eq!(
                source.kind,
                FormatErrorKind::HeaderTokenCount {
                    expected: 2,
                    found: 3
                }
            );
        }
        other => panic!("expected InvalidPreset, got {other:?}"),
    }

    // "bright" sorts before "broken" and was kept
    let names: Vec<_> = controller.presets().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["current", "bright"]);
}

/// Test rendering the loaded current preset reproduces its content.
#[test]
fn test_render_loaded_current() {
    let dir = config_dir();
    let controller = load(dir.path());

    let current = controller.current().unwrap();
    let text = format::render(&current.nodes, true);
    assert_eq!(text, "eq 1 {\n0\n3.5\n-2\n}\nsrc 0 {\n48000\n1\n}\n");

    let reparsed = format::parse(&text, true).unwrap();
    assert_eq!(reparsed, current.nodes);
}

/// Test two concatenated blocks parse in source order.
#[test]
fn test_concatenated_blocks() {
    let a = format::render(&[Node::new("eq").with_item("1")], false);
    let b = format::render(&[Node::new("gain").with_item("2")], false);

    let nodes = format::parse(&format!("{a}{b}"), false).unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].unit_type, "eq");
    assert_eq!(nodes[1].unit_type, "gain");
}
