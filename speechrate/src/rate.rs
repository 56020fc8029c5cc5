//! Speech rate reduction over context windows.

use crate::error::{MalformedInput, RateError, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// Speech rate around a reference token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rate {
    /// Tokens per second across the combined context windows
    PerSecond(f64),
    /// Both context windows are empty: no temporal evidence
    Undefined,
}

impl Rate {
    pub fn value(self) -> Option<f64> {
        match self {
            Rate::PerSecond(rate) => Some(rate),
            Rate::Undefined => None,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Rate::Undefined)
    }

    /// Mean duration per context token in seconds (inverse of the rate).
    pub fn secs_per_token(self) -> Option<f64> {
        self.value().map(f64::recip)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rate::PerSecond(rate) => rate.fmt(f),
            Rate::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Count and duration of one window.
///
/// Fails on the first negative or non-finite distance.
fn summarize(distances: &[f64]) -> std::result::Result<(usize, f64), MalformedInput> {
    distances
        .iter()
        .enumerate()
        .try_fold(0.0_f64, |max, (index, &distance)| {
            MalformedInput::check_distance(index, distance).map(|d| max.max(d))
        })
        .map(|duration| (distances.len(), duration))
}

/// Compute the speech rate from left and right context distances.
///
/// The duration of a window is its largest distance. With both windows
/// populated the rate is `(n_left + n_right) / (dur_left + dur_right)`; with
/// one window empty only the other is used. Both empty yields
/// [`Rate::Undefined`].
///
/// A populated context spanning zero seconds (duplicate timestamps), or one so
/// short that the rate overflows, fails with [`RateError::DegenerateDuration`]
/// rather than producing an infinite rate.
pub fn compute_rate(left: &[f64], right: &[f64]) -> Result<Rate> {
    let (n_left, dur_left) = summarize(left).map_err(RateError::from)?;
    let (n_right, dur_right) = summarize(right).map_err(RateError::from)?;

    let count = n_left + n_right;
    if count == 0 {
        return Ok(Rate::Undefined);
    }

    let duration = dur_left + dur_right;
    let rate = count as f64 / duration;
    if !rate.is_finite() {
        tracing::debug!(count, duration, "context duration too short for a finite rate");
        return Err(RateError::DegenerateDuration { count }.into());
    }

    Ok(Rate::PerSecond(rate))
}
