//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "srate")]
#[command(about = "Local speech rate from time-aligned transcripts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the speech rate around each token of a .words transcript
    Rate(crate::rate::Args),

    /// Print the effective break label set
    Labels(crate::labels::Args),
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Rate(args) => crate::rate::execute(args.try_into()?),
        Commands::Labels(args) => crate::labels::execute(args.try_into()?),
    }
}
