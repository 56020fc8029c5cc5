//! speechrate: local speech rate estimation for time-aligned transcripts.
//!
//! The rate around a reference token is derived from the temporal spacing of
//! its neighbours. Two stages are involved:
//!
//! - [`context::build_context`]: scans outward from the reference token and
//!   collects the distances (in seconds) to up to `span` neighbours on each
//!   side, stopping at recording edges and at break-labelled tokens
//! - [`rate::compute_rate`]: reduces the two windows to a single words per
//!   second value
//!
//! # Quick Start
//!
//! ```
//! use speechrate::context::build_context;
//! use speechrate::labels::BreakLabels;
//! use speechrate::rate::Rate;
//! use speechrate::types::{Span, Token};
//!
//! let tokens: Vec<Token> = [0.0, 0.5, 1.0, 1.5, 2.0]
//!     .into_iter()
//!     .map(|t| Token::new("word", t))
//!     .collect();
//!
//! let context = build_context(&tokens, 2, Span::new(2), &BreakLabels::default())?;
//! assert_eq!(context.rate()?, Rate::PerSecond(2.0));
//! # Ok::<(), speechrate::error::Error>(())
//! ```

pub mod context;
pub mod error;
pub mod labels;
pub mod rate;
pub mod types;
