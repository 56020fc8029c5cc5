//! Rate subcommand - report the speech rate around transcript tokens.

use crate::config::{LabelArgs, LabelConfig};
use crate::words::read_words;
use eyre::{Result, WrapErr};
use serde::Serialize;
use speechrate::context::build_context;
use speechrate::labels::BreakLabels;
use speechrate::rate::Rate;
use speechrate::types::{Span, Token, WindowConfig};
use std::io::Write;
use std::path::PathBuf;

/// Report output format.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated table with a header row
    #[default]
    Tsv,
    /// One JSON object per line
    Json,
}

/// CLI arguments for rate reporting.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to a Buckeye .words transcript
    pub path: PathBuf,

    /// Only report the token at this index (0-based, header excluded)
    #[arg(short, long)]
    pub position: Option<usize>,

    /// Skip reference tokens that are themselves break labels
    #[arg(long)]
    pub words_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub window: WindowConfig,

    #[command(flatten)]
    pub labels: LabelArgs,
}

/// Resolved configuration for rate reporting.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub position: Option<usize>,
    pub words_only: bool,
    pub format: OutputFormat,
    pub span: Span,
    pub labels: BreakLabels,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let span = args.window.span().wrap_err("invalid window configuration")?;
        let LabelConfig { labels } = args.labels.try_into()?;

        Ok(Self {
            path: args.path,
            position: args.position,
            words_only: args.words_only,
            format: args.format,
            span,
            labels,
        })
    }
}

/// Outcome of the rate computation for one row.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Undefined,
    Degenerate,
}

/// One report row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row<'a> {
    pub index: usize,
    pub end_time: f64,
    pub label: &'a str,
    pub left: usize,
    pub right: usize,
    pub rate: Option<f64>,
    pub status: Status,
}

impl Row<'_> {
    fn to_tsv(&self) -> String {
        let rate = match (self.status, self.rate) {
            (Status::Ok, Some(rate)) => format!("{rate:.4}"),
            (Status::Degenerate, _) => "degenerate".to_string(),
            _ => "undefined".to_string(),
        };

        format!(
            "{}\t{:.6}\t{}\t{}\t{}\t{}",
            self.index, self.end_time, self.label, self.left, self.right, rate
        )
    }
}

const TSV_HEADER: &str = "index\tend_time\tlabel\tleft\tright\trate";

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        input = ?config.path.display(),
        span = config.span.get(),
        labels = config.labels.len(),
        "computing speech rate"
    );

    let tokens = read_words(&config.path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_report(&mut out, &tokens, &config)
        .wrap_err_with(|| format!("failed to compute rate for {:?}", config.path.display()))
}

/// Compute rows for the configured reference tokens.
pub fn report<'a>(tokens: &'a [Token], config: &Config) -> Result<Vec<Row<'a>>> {
    let positions: Box<dyn Iterator<Item = usize>> = match config.position {
        Some(position) => Box::new(std::iter::once(position)),
        None => Box::new(0..tokens.len()),
    };

    let mut rows = Vec::new();

    for index in positions {
        if config.words_only
            && let Some(token) = tokens.get(index)
            && token.is_break(&config.labels)
        {
            continue;
        }

        rows.push(row(tokens, index, config)?);
    }

    Ok(rows)
}

fn row<'a>(tokens: &'a [Token], index: usize, config: &Config) -> Result<Row<'a>> {
    let context = build_context(tokens, index, config.span, &config.labels)
        .wrap_err_with(|| format!("failed to build context for token {index}"))?;
    let token = &tokens[index];

    let (rate, status) = match context.rate() {
        Ok(Rate::PerSecond(rate)) => (Some(rate), Status::Ok),
        Ok(Rate::Undefined) => (None, Status::Undefined),
        Err(e) if e.is_degenerate() => {
            tracing::warn!(index, label = %token.label, error = %e, "zero-duration context");
            (None, Status::Degenerate)
        }
        Err(e) => return Err(e).wrap_err_with(|| format!("invalid context at token {index}")),
    };

    Ok(Row {
        index,
        end_time: token.end_time,
        label: &token.label,
        left: context.left.len(),
        right: context.right.len(),
        rate,
        status,
    })
}

/// Write the report for `tokens` in the configured format.
pub fn write_report(out: &mut impl Write, tokens: &[Token], config: &Config) -> Result<()> {
    let rows = report(tokens, config)?;

    match config.format {
        OutputFormat::Tsv => {
            writeln!(out, "{TSV_HEADER}")?;
            for row in &rows {
                writeln!(out, "{}", row.to_tsv())?;
            }
        }
        OutputFormat::Json => {
            for row in &rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
        }
    }

    let undefined = rows.iter().filter(|r| r.status != Status::Ok).count();
    tracing::info!(rows = rows.len(), undefined, "report written");

    Ok(())
}
