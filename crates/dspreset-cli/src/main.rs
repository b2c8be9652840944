//! dspreset CLI - inspect and edit unit-chain preset catalogs.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dspreset")]
#[command(author, version, about = "DSP chain preset catalog tool", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: commands::common::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the presets in the catalog
    List(commands::list::ListArgs),

    /// Show the units of one preset
    Show(commands::show::ShowArgs),

    /// Add units to the current preset (in memory only)
    Add(commands::add::AddArgs),

    /// List available unit types
    Types(commands::types::TypesArgs),

    /// Parse a single preset file
    Check(commands::check::CheckArgs),

    /// Show resolved preset locations
    Paths,
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => commands::list::run(&cli.global, args),
        Commands::Show(args) => commands::show::run(&cli.global, args),
        Commands::Add(args) => commands::add::run(&cli.global, args),
        Commands::Types(args) => commands::types::run(&cli.global, args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Paths => commands::paths::run(&cli.global),
    }
}
