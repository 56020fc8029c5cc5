//! Labels subcommand - print the effective break label set.

use crate::config::{LabelArgs, LabelConfig};
use eyre::Result;
use speechrate::labels::BreakLabels;
use std::io::Write;

/// CLI arguments for listing break labels.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub labels: LabelArgs,
}

/// Resolved configuration for listing break labels.
#[derive(Debug)]
pub struct Config {
    pub labels: BreakLabels,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let LabelConfig { labels } = args.labels.try_into()?;
        Ok(Self { labels })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let stdout = std::io::stdout();
    write_labels(&mut stdout.lock(), &config.labels)
}

/// Write one label per line in sorted order.
pub fn write_labels(out: &mut impl Write, labels: &BreakLabels) -> Result<()> {
    for label in labels.iter() {
        writeln!(out, "{label}")?;
    }
    Ok(())
}
