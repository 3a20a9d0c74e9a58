use chrono::NaiveDateTime;

use super::boundary::BoundaryTracker;
use super::cohort::Cohort;
use super::span::{Span, trim_span};
use super::totals::RunningTotals;
use crate::{DayBoundary, Event, TallyError};

/// Running totals of one cohort actor, one value per day boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Actor the totals belong to.
    pub actor: String,
    /// Running total at each day boundary; non-decreasing.
    pub values: Vec<u64>,
}

impl History {
    /// The trimmed index range of the changing part of this history.
    #[must_use]
    pub fn span(&self) -> Span {
        trim_span(&self.values)
    }

    /// Total at the last day boundary, or `None` for an empty history.
    #[must_use]
    pub fn last_value(&self) -> Option<u64> {
        self.values.last().copied()
    }
}

/// Day-boundary timestamps and the dense per-actor histories aligned to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailySeries {
    /// Timestamp of the event that opened each day, chronological.
    pub day_boundaries: Vec<NaiveDateTime>,
    /// One history per cohort actor, in cohort order.
    pub histories: Vec<History>,
}

impl DailySeries {
    /// Number of day boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.day_boundaries.len()
    }

    /// True when no day boundary was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.day_boundaries.is_empty()
    }

    /// History of `actor`, if it is a cohort member.
    #[must_use]
    pub fn history(&self, actor: &str) -> Option<&History> {
        self.histories.iter().find(|h| h.actor == actor)
    }

    /// Ensure every history has exactly one value per day boundary.
    ///
    /// # Errors
    /// Returns `Err(TallyError::Data)` naming the first misaligned actor.
    pub fn check_aligned(&self) -> Result<(), TallyError> {
        let want = self.day_boundaries.len();
        match self.histories.iter().find(|h| h.values.len() != want) {
            Some(h) => Err(TallyError::Data(format!(
                "history for {:?} has {} values, expected {}",
                h.actor,
                h.values.len(),
                want
            ))),
            None => Ok(()),
        }
    }
}

/// Build dense daily histories for the members of `cohort`.
///
/// Events of non-members are dropped. Day crossings are detected on the
/// remaining events only, with the same rule as [`super::cohort::select_cohort`].
/// On each crossing the crossing event's timestamp is recorded and *every*
/// member's current total is appended, so members without activity that day
/// repeat their previous value. Values therefore include the crossing event
/// itself but not later same-day events, which land at the next boundary.
///
/// # Errors
/// Returns `Err(TallyError::Data)` if a member's running total overflows `u64`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tally_core::timeseries::build_series",
        skip(events, cohort),
        fields(events = events.len(), members = cohort.len()),
    )
)]
pub fn build_series(
    events: &[Event],
    cohort: &Cohort,
    mode: DayBoundary,
) -> Result<DailySeries, TallyError> {
    let mut totals = RunningTotals::seeded(cohort.actors());
    let mut tracker = BoundaryTracker::new(mode);
    let mut day_boundaries: Vec<NaiveDateTime> = Vec::new();
    let mut columns: Vec<Vec<u64>> = vec![Vec::new(); cohort.len()];

    for ev in events.iter().filter(|ev| cohort.contains(&ev.actor)) {
        totals.add(&ev.actor, ev.quantity)?;
        if tracker.crossed(ev.timestamp) {
            day_boundaries.push(ev.timestamp);
            for (column, (_, total)) in columns.iter_mut().zip(totals.iter()) {
                column.push(total);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(days = day_boundaries.len(), "series built");

    let histories = cohort
        .actors()
        .zip(columns)
        .map(|(actor, values)| History {
            actor: actor.to_owned(),
            values,
        })
        .collect();

    Ok(DailySeries {
        day_boundaries,
        histories,
    })
}
