//! Leaderboard output handed to renderers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tally_core::Span;

/// Dense running-total series of one cohort member and its trimmed span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorSeries {
    /// Actor name.
    pub actor: String,
    /// Running total at each day boundary.
    pub history: Vec<u64>,
    /// Portion of `history` worth drawing.
    pub span: Span,
}

impl ActorSeries {
    /// Total at the last day boundary (zero for an empty history).
    #[must_use]
    pub fn final_total(&self) -> u64 {
        self.history.last().copied().unwrap_or(0)
    }
}

/// Result of a run: shared day boundaries plus one aligned series per cohort member.
///
/// Every `history` has exactly `day_boundaries.len()` values. Series are kept
/// in cohort admission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Timestamp of the event that opened each day.
    pub day_boundaries: Vec<NaiveDateTime>,
    /// Cohort members with their totals as of cohort selection.
    pub cohort: Vec<(String, u64)>,
    /// Per-member series.
    pub histories: Vec<ActorSeries>,
}

impl Leaderboard {
    /// True when the input produced no day boundaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.day_boundaries.is_empty()
    }

    /// Series of `actor`, if it is a cohort member.
    #[must_use]
    pub fn series(&self, actor: &str) -> Option<&ActorSeries> {
        self.histories.iter().find(|s| s.actor == actor)
    }

    /// Running totals of `actor`.
    #[must_use]
    pub fn history(&self, actor: &str) -> Option<&[u64]> {
        self.series(actor).map(|s| s.history.as_slice())
    }

    /// Trimmed span of `actor`.
    #[must_use]
    pub fn span(&self, actor: &str) -> Option<Span> {
        self.series(actor).map(|s| s.span)
    }

    /// Timestamps and values of `actor` restricted to its span.
    #[must_use]
    pub fn series_window(&self, actor: &str) -> Option<(&[NaiveDateTime], &[u64])> {
        let s = self.series(actor)?;
        let range = s.span.as_range();
        Some((
            self.day_boundaries.get(range.clone())?,
            s.history.get(range)?,
        ))
    }

    /// Members ordered by final total, highest first; ties keep cohort order.
    #[must_use]
    pub fn final_standings(&self) -> Vec<(&str, u64)> {
        let mut out: Vec<(&str, u64)> = self
            .histories
            .iter()
            .map(|s| (s.actor.as_str(), s.final_total()))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Largest final total across members, zero when empty.
    #[must_use]
    pub fn max_total(&self) -> u64 {
        self.histories
            .iter()
            .map(ActorSeries::final_total)
            .max()
            .unwrap_or(0)
    }

    /// First and last day boundary.
    #[must_use]
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((*self.day_boundaries.first()?, *self.day_boundaries.last()?))
    }
}
