#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Inspection tool for raw BCn and uncompressed texture surfaces
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    AnalyzeBc(commands::analyze_bc::AnalyzeBcCmd),
    Analyze(commands::analyze::AnalyzeCmd),
    Dump(commands::dump::DumpCmd),
    Diff(commands::diff::DiffCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();
    match cli.command {
        Commands::AnalyzeBc(cmd) => {
            commands::analyze_bc::handle_analyze_bc_command(cmd)?;
        }
        Commands::Analyze(cmd) => {
            commands::analyze::handle_analyze_command(cmd)?;
        }
        Commands::Dump(cmd) => {
            commands::dump::handle_dump_command(cmd)?;
        }
        Commands::Diff(cmd) => {
            commands::diff::handle_diff_command(cmd)?;
        }
    }

    Ok(())
}
