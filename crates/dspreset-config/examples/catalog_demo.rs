//! Catalog demo: parse presets, load a configuration directory, add units.
//!
//! Run with: cargo run -p dspreset-config --example catalog_demo

use std::fs;

use dspreset_config::{FixedPath, PresetController, StaticRegistry, format};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Text format ---
    println!("=== Text Format ===\n");

    let text = "eq 1 {\n0\n3.5\n}\nsrc 0 {\n48000\n}\n";
    for node in format::parse(text, true)? {
        println!(
            "{:8} enabled={:5} items={:?}",
            node.unit_type,
            node.is_enabled(),
            node.items
        );
    }

    match format::parse("bad 1 2 {\n}\n", true) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }

    // --- Catalog ---
    println!("\n=== Catalog ===\n");

    let dir = std::env::temp_dir().join("dspreset-catalog-demo");
    let presets = dir.join("presets").join("dsp");
    fs::create_dir_all(&presets)?;
    fs::write(dir.join("dspconfig"), text)?;
    fs::write(presets.join("warm.txt"), "comp {\n-24\n}\n")?;

    let mut controller = PresetController::new(StaticRegistry::builtin(), FixedPath::new(&dir));
    controller.load()?;

    for preset in controller.presets() {
        println!("{:10} {:?}", preset.name, preset.unit_types());
    }

    // Older presets record fewer values than the unit expects
    let comp = &controller.find("warm").expect("warm preset").nodes[0];
    let defaults = controller.item_defaults("comp").unwrap_or_default();
    println!("\ncomp resolved: {:?}", comp.resolve_items(&defaults));

    // --- Editing ---
    println!("\n=== Editing ===\n");

    controller.add_item("reverb")?;
    controller.add_item("unknown_unit")?;
    if let Some(current) = controller.current() {
        for node in current.iter() {
            let name = node.name.as_deref().unwrap_or("-");
            println!("{:14} {}", node.unit_type, name);
        }
    }

    fs::remove_dir_all(&dir)?;
    Ok(())
}
