//! Core types for speechrate

use crate::error::{ConfigError, Result};
use crate::labels::BreakLabels;

/// Default number of neighbouring tokens per side.
const DEFAULT_SPAN: i64 = 5;

/// Transcript token with its end time.
///
/// Token sequences are expected in chronological order: `end_time` is
/// non-decreasing along the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Word or event label
    pub label: String,
    /// End time in seconds on the recording timeline
    pub end_time: f64,
}

impl Token {
    pub fn new(label: impl Into<String>, end_time: f64) -> Self {
        Self {
            label: label.into(),
            end_time,
        }
    }

    /// Whether this token halts context window expansion.
    pub fn is_break(&self, labels: &BreakLabels) -> bool {
        labels.contains(&self.label)
    }
}

/// Maximum number of neighbouring tokens per context window side.
///
/// A span of 0 is valid and always yields empty windows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span(usize);

impl Span {
    pub const fn new(span: usize) -> Self {
        Self(span)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Span {
    type Error = ConfigError;

    fn try_from(span: i64) -> std::result::Result<Self, ConfigError> {
        usize::try_from(span)
            .map(Self)
            .map_err(|_| ConfigError::InvalidSpan { span })
    }
}

/// Configuration for context windows.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct WindowConfig {
    /// Maximum number of neighbouring tokens per side
    #[arg(long, default_value_t = DEFAULT_SPAN, allow_negative_numbers = true)]
    pub span: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { span: DEFAULT_SPAN }
    }
}

impl WindowConfig {
    pub fn new(span: i64) -> Self {
        Self { span }
    }

    /// Validated span.
    pub fn span(&self) -> Result<Span> {
        Ok(Span::try_from(self.span)?)
    }
}
