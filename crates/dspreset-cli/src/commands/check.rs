//! Single-file parse check.

use anyhow::Context;
use clap::Args;
use dspreset_config::format;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Preset file to parse
    file: PathBuf,

    /// Parse with the current-config header layout (`<type> <enabled> {`)
    #[arg(long)]
    enabled_flag: bool,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let nodes = format::parse(&content, args.enabled_flag)
        .with_context(|| format!("invalid preset {}", args.file.display()))?;

    tracing::debug!(file = %args.file.display(), nodes = nodes.len(), "parsed");

    println!("{}: ok, {} units", args.file.display(), nodes.len());
    for node in &nodes {
        let flag = match node.enabled {
            Some(true) => " [enabled]",
            _ if args.enabled_flag => " [disabled]",
            _ => "",
        };
        println!("  {} ({} items){}", node.unit_type, node.len(), flag);
    }

    Ok(())
}
