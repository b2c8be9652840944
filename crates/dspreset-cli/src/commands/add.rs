//! Add units to the current preset.
//!
//! The catalog is edited in memory and printed; nothing is written back.

use clap::Args;

use super::common::{GlobalArgs, load_catalog, print_preset};

#[derive(Args)]
pub struct AddArgs {
    /// Unit types to append, in order
    #[arg(required = true, value_name = "TYPE")]
    types: Vec<String>,

    /// Print the resulting preset as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(global: &GlobalArgs, args: AddArgs) -> anyhow::Result<()> {
    let mut controller = load_catalog(global)?;

    for unit_type in &args.types {
        controller.add_item(unit_type)?;
    }

    let Some(current) = controller.current() else {
        anyhow::bail!("No current preset.");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(current)?);
    } else {
        print_preset(&controller, current, true);
        println!();
        println!("(not saved)");
    }

    Ok(())
}
