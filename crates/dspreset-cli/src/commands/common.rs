//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use dspreset_config::{
    DefaultPaths, FixedPath, LoaderSettings, Preset, PresetController, StaticRegistry,
};
use std::path::PathBuf;

/// Options accepted by every command.
#[derive(Args)]
pub struct GlobalArgs {
    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Loader settings file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,
}

/// Build a controller for the selected configuration directory without loading.
pub fn controller(global: &GlobalArgs) -> anyhow::Result<PresetController> {
    let registry = StaticRegistry::builtin();
    let controller = match &global.config_dir {
        Some(dir) => PresetController::new(registry, FixedPath::new(dir)),
        None => PresetController::new(registry, DefaultPaths),
    };

    let settings = match &global.settings {
        Some(path) => LoaderSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => LoaderSettings::default(),
    };

    Ok(controller.with_settings(settings))
}

/// Build a controller and load its catalog.
pub fn load_catalog(global: &GlobalArgs) -> anyhow::Result<PresetController> {
    let mut controller = controller(global)?;
    controller.load().context("loading preset catalog")?;
    Ok(controller)
}

/// Print a preset's units with display names and items.
///
/// Items are listed against the unit's defaults: positions the preset did not
/// record are marked `(default)`, positions the unit no longer uses `(unused)`.
pub fn print_preset(controller: &PresetController, preset: &Preset, has_flag: bool) {
    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if preset.is_empty() {
        println!("  (no units)");
        return;
    }

    for (i, node) in preset.iter().enumerate() {
        let name = node
            .name
            .clone()
            .unwrap_or_else(|| controller.item_name(&node.unit_type));
        let marker = match (has_flag, node.is_enabled()) {
            (true, true) => " [enabled]",
            (true, false) => " [disabled]",
            (false, _) => "",
        };
        println!("  {}. {} ({}){}", i + 1, node.unit_type, name, marker);

        let defaults = controller.item_defaults(&node.unit_type).unwrap_or_default();
        let positions = node.len().max(defaults.len());
        for pos in 0..positions {
            match (node.item(pos), defaults.get(pos)) {
                (Some(value), Some(_)) => println!("      {pos:>2}: {value}"),
                (Some(value), None) if defaults.is_empty() => println!("      {pos:>2}: {value}"),
                (Some(value), None) => println!("      {pos:>2}: {value} (unused)"),
                (None, Some(default)) => println!("      {pos:>2}: {default} (default)"),
                (None, None) => {}
            }
        }
    }
}

/// True if the preset at `index` is the live configuration, which carries
/// enabled flags.
pub fn is_current(controller: &PresetController, index: usize) -> bool {
    index == 0 && controller.catalog().has_current()
}
