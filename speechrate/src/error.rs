//! Error types for speechrate organized by processing stage.

use thiserror::Error;

/// Speech rate error variants organized by processing stage.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Configuration stage error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Context window stage error
    #[error(transparent)]
    Window(#[from] WindowError),

    /// Rate reduction stage error
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Negative window span
    #[error("invalid span: {span} (must not be negative)")]
    InvalidSpan { span: i64 },
}

/// Context window construction errors.
#[derive(Debug, Error, PartialEq)]
pub enum WindowError {
    /// Reference position outside the token sequence
    #[error("reference position {position} out of bounds (len {len})")]
    InvalidReference { position: usize, len: usize },

    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

/// Rate reduction errors.
#[derive(Debug, Error, PartialEq)]
pub enum RateError {
    /// Non-empty context whose total duration is zero
    #[error("degenerate duration: {count} context tokens span 0s")]
    DegenerateDuration { count: usize },

    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

/// Precondition violations in caller-supplied data.
#[derive(Debug, Error, PartialEq)]
pub enum MalformedInput {
    /// Distance below zero, usually from non-monotonic timestamps
    #[error("negative distance {distance}s at index {index}")]
    NegativeDistance { index: usize, distance: f64 },

    /// Infinite or NaN distance
    #[error("non-finite distance {distance}s at index {index}")]
    NonFiniteDistance { index: usize, distance: f64 },
}

impl MalformedInput {
    /// Accept a finite, non-negative distance.
    pub fn check_distance(index: usize, distance: f64) -> std::result::Result<f64, Self> {
        if !distance.is_finite() {
            Err(Self::NonFiniteDistance { index, distance })
        } else if distance < 0.0 {
            Err(Self::NegativeDistance { index, distance })
        } else {
            Ok(distance)
        }
    }
}

/// Result type alias for speechrate operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error flags a zero-duration window.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Error::Rate(RateError::DegenerateDuration { .. }))
    }
}

// Nested From implementations for automatic error conversion chains

// MalformedInput → WindowError → Error
//
// Malformed input surfacing outside the rate reducer is attributed to the
// window stage, where timestamps are first compared.
impl From<MalformedInput> for Error {
    fn from(e: MalformedInput) -> Self {
        Error::Window(WindowError::Malformed(e))
    }
}
