//! Catalog listing command.

use clap::Args;

use super::common::{GlobalArgs, is_current, load_catalog};

#[derive(Args)]
pub struct ListArgs {
    /// Print only preset names, one per line
    #[arg(long)]
    names: bool,
}

pub fn run(global: &GlobalArgs, args: ListArgs) -> anyhow::Result<()> {
    let controller = load_catalog(global)?;

    if args.names {
        for preset in controller.presets() {
            println!("{}", preset.name);
        }
        return Ok(());
    }

    println!("Presets:");
    println!("========");
    if controller.is_empty() {
        println!("  (none)");
        println!();
        println!("  Looked in {}", controller.presets_dir().display());
        return Ok(());
    }

    for (i, preset) in controller.presets().iter().enumerate() {
        let tag = if is_current(&controller, i) { " *" } else { "" };
        let units = preset.unit_types().join(" > ");
        println!("  {:20} {:2} units  {}{}", preset.name, preset.len(), units, tag);
    }
    println!();

    Ok(())
}
