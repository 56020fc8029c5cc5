//! Break labels that delimit context windows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Buckeye corpus labels for non-fluent events (Table 4 of the corpus manual).
///
/// | Label        | Event                                  |
/// |--------------|----------------------------------------|
/// | `<SIL>`      | pause                                  |
/// | `<LAUGH>`    | laughter without producing a word      |
/// | `<IVER>`     | interviewer's turn                     |
/// | `<UNKNOWN>`  | audible but unintelligible speech      |
/// | `<VOCNOISE>` | non-speech vocalization                |
/// | `<NOISE>`    | environmental noise                    |
/// | `{B_TRANS}`  | beginning of transcript                |
/// | `{E_TRANS}`  | end of transcript                      |
pub const BUCKEYE_BREAK_LABELS: &[&str] = &[
    "<SIL>",
    "<LAUGH>",
    "<IVER>",
    "<UNKNOWN>",
    "<VOCNOISE>",
    "<NOISE>",
    "{B_TRANS}",
    "{E_TRANS}",
];

/// Set of labels marking a token as a disfluency rather than a countable word.
///
/// Membership is an exact, case-sensitive string match. Serialized as a plain
/// array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakLabels(BTreeSet<String>);

impl Default for BreakLabels {
    fn default() -> Self {
        BUCKEYE_BREAK_LABELS.iter().copied().collect()
    }
}

impl BreakLabels {
    /// Set with no labels; windows only stop at recording edges.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Add a label, returning whether it was newly inserted.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BreakLabels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for BreakLabels {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}
