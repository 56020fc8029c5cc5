//! Context windows of temporal distances around a reference token.

use crate::error::{MalformedInput, Result, WindowError};
use crate::labels::BreakLabels;
use crate::rate::{Rate, compute_rate};
use crate::types::{Span, Token};

/// Scan direction relative to the reference token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the recording
    Left,
    /// Towards the end of the recording
    Right,
}

impl Direction {
    /// Index `distance` steps away from `origin`, or `None` past either edge.
    fn offset(self, origin: usize, distance: usize, len: usize) -> Option<usize> {
        match self {
            Direction::Left => origin.checked_sub(distance),
            Direction::Right => origin.checked_add(distance).filter(|&i| i < len),
        }
    }

    /// Signed distance between a neighbour's time and the reference time.
    fn distance(self, reference: f64, neighbour: f64) -> f64 {
        match self {
            Direction::Left => reference - neighbour,
            Direction::Right => neighbour - reference,
        }
    }
}

/// Temporal distances (seconds) from the reference token, nearest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextWindow(Vec<f64>);

impl ContextWindow {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Distance to the farthest included token, `None` for an empty window.
    pub fn duration(&self) -> Option<f64> {
        self.0.iter().copied().reduce(f64::max)
    }
}

/// Left and right context windows of one reference token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Context {
    pub left: ContextWindow,
    pub right: ContextWindow,
}

impl Context {
    /// Reduce both windows to a speech rate.
    pub fn rate(&self) -> Result<Rate> {
        compute_rate(self.left.as_slice(), self.right.as_slice())
    }
}

/// Build the left and right context windows around `tokens[ref_pos]`.
///
/// Each window holds up to `span` distances. A window stops early at the
/// recording edge or before the first token whose label is in `labels`. The
/// reference token itself is never included.
///
/// `tokens` must be ordered by non-decreasing `end_time`. A negative distance
/// produced by out-of-order timestamps is reported as
/// [`MalformedInput::NegativeDistance`], an infinite or NaN one as
/// [`MalformedInput::NonFiniteDistance`].
pub fn build_context(
    tokens: &[Token],
    ref_pos: usize,
    span: Span,
    labels: &BreakLabels,
) -> Result<Context> {
    let left = window(tokens, ref_pos, span, labels, Direction::Left)?;
    let right = window(tokens, ref_pos, span, labels, Direction::Right)?;

    tracing::debug!(
        ref_pos,
        span = span.get(),
        left = left.len(),
        right = right.len(),
        "built context"
    );

    Ok(Context { left, right })
}

/// Build the context window on one side of `tokens[ref_pos]`.
pub fn window(
    tokens: &[Token],
    ref_pos: usize,
    span: Span,
    labels: &BreakLabels,
    direction: Direction,
) -> Result<ContextWindow> {
    let reference = tokens.get(ref_pos).ok_or(WindowError::InvalidReference {
        position: ref_pos,
        len: tokens.len(),
    })?;

    let mut distances = Vec::with_capacity(span.get().min(tokens.len()));

    for step in 1..=span.get() {
        let Some(index) = direction.offset(ref_pos, step, tokens.len()) else {
            tracing::trace!(ref_pos, ?direction, step, "window reached recording edge");
            break;
        };

        let token = &tokens[index];
        if token.is_break(labels) {
            tracing::trace!(
                ref_pos,
                ?direction,
                index,
                label = %token.label,
                "window stopped at break label"
            );
            break;
        }

        let distance = direction.distance(reference.end_time, token.end_time);
        distances.push(MalformedInput::check_distance(index, distance)?);
    }

    Ok(ContextWindow(distances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn words(times: &[f64]) -> Vec<Token> {
        times.iter().map(|&t| Token::new("word", t)).collect()
    }

    fn build(tokens: &[Token], ref_pos: usize, span: usize) -> Context {
        build_context(tokens, ref_pos, Span::new(span), &BreakLabels::default()).unwrap()
    }

    #[test]
    fn builds_symmetric_windows() {
        let tokens = words(&[0.0, 0.5, 1.0, 1.5, 2.0]);

        let context = build(&tokens, 2, 2);

        assert_eq!(context.left.as_slice(), [0.5, 1.0]);
        assert_eq!(context.right.as_slice(), [0.5, 1.0]);
        assert_eq!(context.left.duration(), Some(1.0));
    }

    #[test]
    fn first_token_has_empty_left_window() {
        let tokens = words(&[0.0, 0.5, 1.0, 1.5, 2.0]);

        for span in [0, 1, 2, 10] {
            assert!(build(&tokens, 0, span).left.is_empty());
        }
        assert_eq!(build(&tokens, 0, 2).right.as_slice(), [0.5, 1.0]);
    }

    #[test]
    fn last_token_has_empty_right_window() {
        let tokens = words(&[0.0, 0.5, 1.0, 1.5, 2.0]);

        for span in [0, 1, 2, 10] {
            assert!(build(&tokens, 4, span).right.is_empty());
        }
        assert_eq!(build(&tokens, 4, 2).left.as_slice(), [0.5, 1.0]);
    }

    #[test]
    fn zero_span_yields_empty_windows() {
        let tokens = words(&[0.0, 0.5, 1.0]);

        for ref_pos in 0..tokens.len() {
            assert_eq!(build(&tokens, ref_pos, 0), Context::default());
        }
    }

    #[test]
    fn windows_are_bounded_by_span() {
        let tokens = words(&[0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0]);

        for ref_pos in 0..tokens.len() {
            for span in 0..12 {
                let context = build(&tokens, ref_pos, span);
                assert!(context.left.len() <= span);
                assert!(context.right.len() <= span);
                assert_eq!(context.left.len(), span.min(ref_pos));
                assert_eq!(context.right.len(), span.min(tokens.len() - 1 - ref_pos));
            }
        }
    }

    #[test]
    fn stops_before_break_label() {
        let tokens = vec![
            Token::new("<SIL>", 0.0),
            Token::new("word", 0.5),
            Token::new("word", 1.0),
        ];

        let context = build(&tokens, 1, 2);

        assert!(context.left.is_empty());
        assert_eq!(context.right.as_slice(), [0.5]);
    }

    #[test]
    fn adjacent_break_label_empties_side() {
        let tokens = vec![
            Token::new("word", 0.0),
            Token::new("word", 0.4),
            Token::new("<NOISE>", 0.6),
            Token::new("word", 1.0),
            Token::new("<LAUGH>", 1.5),
            Token::new("word", 1.8),
            Token::new("word", 2.0),
        ];

        let context = build(&tokens, 3, 5);

        assert_eq!(context, Context::default());
    }

    #[test]
    fn break_label_beyond_first_neighbour_truncates() {
        let tokens = vec![
            Token::new("word", 0.0),
            Token::new("<VOCNOISE>", 0.2),
            Token::new("word", 0.5),
            Token::new("word", 0.9),
            Token::new("word", 1.0),
        ];

        let context = build(&tokens, 3, 3);

        assert_eq!(context.left.len(), 1);
        assert!((context.left.as_slice()[0] - 0.4).abs() < 1e-9);
        assert!((context.right.as_slice()[0] - 0.1).abs() < 1e-9);
    }

    #[test]
    fn custom_labels_replace_defaults() {
        let tokens = vec![
            Token::new("<SIL>", 0.0),
            Token::new("uh", 0.5),
            Token::new("word", 1.0),
            Token::new("word", 1.5),
        ];
        let labels = BreakLabels::from_iter(["uh"]);

        let context = build_context(&tokens, 2, Span::new(3), &labels).unwrap();

        assert!(context.left.is_empty());
        assert_eq!(context.right.as_slice(), [0.5]);

        let context = build_context(&tokens, 1, Span::new(3), &labels).unwrap();
        assert_eq!(context.left.as_slice(), [0.5]);
    }

    #[test]
    fn reference_label_does_not_matter() {
        let tokens = vec![
            Token::new("word", 0.0),
            Token::new("<SIL>", 0.5),
            Token::new("word", 1.0),
        ];

        let context = build(&tokens, 1, 1);

        assert_eq!(context.left.as_slice(), [0.5]);
        assert_eq!(context.right.as_slice(), [0.5]);
    }

    #[test]
    fn rejects_out_of_bounds_reference() {
        let tokens = words(&[0.0, 0.5]);

        let result = build_context(&tokens, 2, Span::new(1), &BreakLabels::default());

        assert_eq!(
            result,
            Err(Error::Window(WindowError::InvalidReference {
                position: 2,
                len: 2
            }))
        );
        assert!(build_context(&[], 0, Span::new(0), &BreakLabels::default()).is_err());
    }

    #[test]
    fn rejects_non_monotonic_timestamps() {
        let tokens = words(&[0.0, 1.0, 0.5]);

        let result = build_context(&tokens, 1, Span::new(1), &BreakLabels::default());

        match result {
            Err(Error::Window(WindowError::Malformed(MalformedInput::NegativeDistance {
                index,
                distance,
            }))) => {
                assert_eq!(index, 2);
                assert!((distance + 0.5).abs() < 1e-9);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_infinite_timestamp() {
        let tokens = words(&[0.0, f64::INFINITY]);

        let result = build_context(&tokens, 0, Span::new(1), &BreakLabels::default());

        assert_eq!(
            result,
            Err(Error::Window(WindowError::Malformed(
                MalformedInput::NonFiniteDistance {
                    index: 1,
                    distance: f64::INFINITY
                }
            )))
        );
    }

    #[test]
    fn rejects_nan_timestamp() {
        let tokens = words(&[0.0, 0.5, f64::NAN]);

        let result = build_context(&tokens, 1, Span::new(1), &BreakLabels::default());

        assert!(matches!(
            result,
            Err(Error::Window(WindowError::Malformed(
                MalformedInput::NonFiniteDistance { index: 2, .. }
            )))
        ));
    }

    #[test]
    fn one_sided_window_matches_context() {
        let tokens = words(&[0.0, 0.5, 1.0, 1.5, 2.0]);
        let labels = BreakLabels::default();

        let left = window(&tokens, 3, Span::new(2), &labels, Direction::Left).unwrap();
        let right = window(&tokens, 3, Span::new(2), &labels, Direction::Right).unwrap();

        assert_eq!(left.into_inner(), vec![0.5, 1.0]);
        assert_eq!(right.into_inner(), vec![0.5]);
    }
}
