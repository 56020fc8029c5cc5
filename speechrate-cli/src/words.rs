//! Reader for Buckeye corpus `.words` transcripts.
//!
//! A `.words` file starts with a free-form header terminated by a line
//! holding a single `#`. Each following line describes one token:
//!
//! ```text
//!   32.622045  122 okay; ow k ey; ow k ey; UH
//!   33.010000  121 <SIL>; U; U; null
//! ```
//!
//! The first field is the token's end time in seconds, the second the
//! annotation tier colour, the third the word label terminated by `;`.

use color_eyre::Section;
use eyre::{OptionExt, Result, WrapErr, eyre};
use speechrate::types::Token;
use std::path::Path;

/// Line terminating the file header.
const HEADER_END: &str = "#";

/// Read and parse a `.words` transcript.
pub fn read_words(path: &Path) -> Result<Vec<Token>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read transcript: {:?}", path.display()))?;

    let tokens = parse_words(&content)
        .wrap_err_with(|| format!("failed to parse transcript: {:?}", path.display()))
        .suggestion("expected a Buckeye .words file: `<end time> <tier> <label>; ...` per line")?;

    tracing::info!(path = ?path.display(), tokens = tokens.len(), "read transcript");

    Ok(tokens)
}

/// Parse `.words` content, with or without its header.
pub fn parse_words(content: &str) -> Result<Vec<Token>> {
    let lines: Vec<&str> = content.lines().collect();

    // index of the first data line
    let first = lines
        .iter()
        .position(|line| line.trim() == HEADER_END)
        .map_or(0, |i| i + 1);

    lines
        .iter()
        .enumerate()
        .skip(first)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            parse_line(line).wrap_err_with(|| format!("invalid entry at line {}", i + 1))
        })
        .collect()
}

/// Parse a single data line into a token.
fn parse_line(line: &str) -> Result<Token> {
    let mut fields = line.split_whitespace();

    let time = fields.next().ok_or_eyre("missing end time")?;
    let end_time: f64 = time
        .parse()
        .wrap_err_with(|| format!("invalid end time: {time:?}"))?;

    if !end_time.is_finite() || end_time < 0.0 {
        return Err(eyre!("end time must be a non-negative number: {time:?}"));
    }

    let _tier = fields.next().ok_or_eyre("missing tier")?;
    let label = fields
        .next()
        .map(|label| label.trim_end_matches(';'))
        .filter(|label| !label.is_empty())
        .ok_or_eyre("missing label")?;

    Ok(Token::new(label, end_time))
}
