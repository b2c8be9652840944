//! Preset detail command.

use clap::Args;

use super::common::{GlobalArgs, is_current, load_catalog, print_preset};

#[derive(Args)]
pub struct ShowArgs {
    /// Preset name (defaults to the current preset)
    name: Option<String>,

    /// Print the preset as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(global: &GlobalArgs, args: ShowArgs) -> anyhow::Result<()> {
    let controller = load_catalog(global)?;

    let index = match &args.name {
        Some(name) => controller
            .presets()
            .iter()
            .position(|p| &p.name == name)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Preset '{}' not found. Use 'dspreset list' to see available presets.",
                    name
                )
            })?,
        None if controller.is_empty() => anyhow::bail!("No presets loaded."),
        None => 0,
    };

    let Some(preset) = controller.preset(index) else {
        anyhow::bail!("Preset index {} out of range", index);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(preset)?);
    } else {
        print_preset(&controller, preset, is_current(&controller, index));
    }

    Ok(())
}
