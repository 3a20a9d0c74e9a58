use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Half-open index range `[first, last)` into a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// First index to render.
    pub first: usize,
    /// One past the last index to render.
    pub last: usize,
}

impl Span {
    /// The span as a slice range.
    #[must_use]
    pub const fn as_range(&self) -> Range<usize> {
        self.first..self.last
    }

    /// Number of indices covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.last - self.first
    }

    /// True when the span covers nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first == self.last
    }
}

/// Trim the flat leading and trailing runs of `history`.
///
/// A change happens at index `i` when `history[i] != history[i - 1]`. With
/// `c0` the first and `cn` the last change:
///
/// - `first = c0 - 1`, keeping the single flat point before the first change;
/// - `last = cn + 1`, ending on the value reached by the last change.
///
/// A history without changes (constant, or a single value) keeps its whole
/// range; an empty history yields `[0, 0)`.
///
/// ```
/// use tally_core::{Span, trim_span};
///
/// assert_eq!(trim_span(&[1, 2, 2, 2]), Span { first: 0, last: 2 });
/// assert_eq!(trim_span(&[0, 0, 3, 5, 5]), Span { first: 1, last: 4 });
/// assert_eq!(trim_span(&[4, 4, 4]), Span { first: 0, last: 3 });
/// ```
#[must_use]
pub fn trim_span(history: &[u64]) -> Span {
    let len = history.len();
    let (head, tail) = (history.first().copied(), history.last().copied());

    // Forward: length of the run equal to history[0].
    let lead = history.iter().take_while(|&&v| Some(v) == head).count();
    // Backward: length of the run equal to the final value.
    let trail = history.iter().rev().take_while(|&&v| Some(v) == tail).count();

    if lead == len {
        return Span {
            first: 0,
            last: len,
        };
    }

    Span {
        first: lead.saturating_sub(1),
        last: (len - trail + 1).min(len),
    }
}
