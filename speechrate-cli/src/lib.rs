//! speechrate-cli: command line front end for speechrate.
//!
//! Reads Buckeye `.words` transcripts and reports the local speech rate of
//! each token.

pub mod cli;
pub mod config;
pub mod labels;
pub mod rate;
pub mod words;
