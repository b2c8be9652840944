//! Unit type listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;

use super::common::{GlobalArgs, controller};

#[derive(Args)]
pub struct TypesArgs {
    /// Show the default value of each parameter position
    #[arg(long)]
    defaults: bool,
}

pub fn run(global: &GlobalArgs, args: TypesArgs) -> anyhow::Result<()> {
    let controller = controller(global)?;

    println!("Available Units:");
    println!();
    println!("  {:10}  {:18}  {:12}  {}", "Type", "Name", "Category", "Params");
    println!("  {:10}  {:18}  {:12}  {}", "----", "----", "--------", "------");

    for unit_type in controller.item_types() {
        let name = controller.item_name(&unit_type);
        let (category, params) = controller
            .item_descriptor(&unit_type)
            .map(|d| (d.category.name(), d.param_count()))
            .unwrap_or(("-", 0));
        println!("  {unit_type:10}  {name:18}  {category:12}  {params}");

        if args.defaults
            && let Some(defaults) = controller.item_defaults(&unit_type)
        {
            println!("      defaults: {}", defaults.join(" "));
        }
    }
    println!();

    Ok(())
}
