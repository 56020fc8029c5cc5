//! Configuration types for resolved CLI arguments.
//!
//! Break labels may come from the built-in Buckeye set, a JSON file holding
//! an array of labels, and repeated `--break-label` flags, in that order.

use color_eyre::Section;
use eyre::{Result, WrapErr};
use speechrate::labels::BreakLabels;
use std::path::{Path, PathBuf};

/// CLI arguments selecting the break label set.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct LabelArgs {
    /// Additional label that stops a context window (repeatable)
    #[arg(long = "break-label", value_name = "LABEL")]
    pub break_labels: Vec<String>,

    /// JSON file with an array of break labels, added to the set
    #[arg(long, value_name = "FILE")]
    pub labels_file: Option<PathBuf>,

    /// Start from an empty set instead of the Buckeye labels
    #[arg(long)]
    pub no_default_labels: bool,
}

/// Resolved break label configuration.
///
/// Converted from LabelArgs via TryFrom.
#[derive(Debug)]
pub struct LabelConfig {
    pub labels: BreakLabels,
}

impl TryFrom<LabelArgs> for LabelConfig {
    type Error = eyre::Error;

    fn try_from(args: LabelArgs) -> Result<Self> {
        let mut labels = if args.no_default_labels {
            BreakLabels::empty()
        } else {
            BreakLabels::default()
        };

        if let Some(path) = args.labels_file.as_deref() {
            labels.extend(read_labels_file(path)?.iter().map(str::to_owned));
        }

        labels.extend(args.break_labels);

        tracing::debug!(count = labels.len(), "resolved break labels");

        Ok(Self { labels })
    }
}

/// Read a JSON array of break labels.
pub fn read_labels_file(path: &Path) -> Result<BreakLabels> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read labels file: {:?}", path.display()))?;

    serde_json::from_str(&content)
        .wrap_err_with(|| format!("failed to parse labels file: {:?}", path.display()))
        .suggestion(r#"labels file must be a JSON array of strings, e.g. ["<SIL>", "<HES>"]"#)
}
