//! Phonotok CLI - Command-line interface for pronunciation vocabularies.
//!
//! This is the main entry point for the `phonotok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BuildCommand, DecodeCommand, EncodeCommand, StatsCommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "phonotok")]
#[command(about = "Character vocabularies and codecs for pronunciation dictionaries", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build vocabulary files from a pronunciation dictionary
    Build(BuildCommand),
    /// Encode text to token ids with a saved vocabulary
    Encode(EncodeCommand),
    /// Decode token ids back to text
    Decode(DecodeCommand),
    /// Load a dictionary and print validation statistics
    Stats(StatsCommand),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build(cmd) => commands::build::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
    }

    Ok(())
}
