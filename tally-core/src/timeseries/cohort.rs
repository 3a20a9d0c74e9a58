use std::collections::HashMap;

use super::boundary::BoundaryTracker;
use super::totals::RunningTotals;
use crate::{DayBoundary, Event, TallyError};

/// Actors that ranked within the top N at one or more day boundaries.
///
/// Membership is append-only. Iteration follows admission order; actors
/// admitted by the same snapshot keep that snapshot's rank order. Each stored
/// total is the actor's running total at the last snapshot that ranked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cohort {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Cohort {
    /// Insert `actor` or overwrite its stored total.
    pub fn upsert(&mut self, actor: &str, total: u64) {
        if let Some(&i) = self.index.get(actor) {
            self.entries[i].1 = total;
        } else {
            self.index.insert(actor.to_owned(), self.entries.len());
            self.entries.push((actor.to_owned(), total));
        }
    }

    /// Whether `actor` has ever been ranked.
    #[must_use]
    pub fn contains(&self, actor: &str) -> bool {
        self.index.contains_key(actor)
    }

    /// Stored total for `actor`.
    #[must_use]
    pub fn get(&self, actor: &str) -> Option<u64> {
        self.index.get(actor).map(|&i| self.entries[i].1)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nobody was ever ranked (empty input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members and their stored totals, in admission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(a, t)| (a.as_str(), *t))
    }

    /// Member names in admission order.
    pub fn actors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(a, _)| a.as_str())
    }

    /// Consume into `(actor, total)` pairs in admission order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, u64)> {
        self.entries
    }
}

/// Scan `events` once and collect every actor that ranked within the top
/// `max_rank` by running total at some day boundary.
///
/// At each crossing (see [`BoundaryTracker`]) all actors seen so far are ranked
/// by total descending, ties broken by first-seen order, and the leading
/// `max_rank` are upserted with their current totals. A `max_rank` of zero
/// admits nobody. An empty event slice yields an empty cohort.
///
/// # Errors
/// Returns `Err(TallyError::Data)` if an actor's running total overflows `u64`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "tally_core::timeseries::select_cohort",
        skip(events),
        fields(events = events.len()),
    )
)]
pub fn select_cohort(
    events: &[Event],
    max_rank: usize,
    mode: DayBoundary,
) -> Result<Cohort, TallyError> {
    let (cohort, _, _) = events.iter().try_fold(
        (
            Cohort::default(),
            RunningTotals::default(),
            BoundaryTracker::new(mode),
        ),
        |(mut cohort, mut totals, mut tracker), ev| {
            totals.add(&ev.actor, ev.quantity)?;
            if tracker.crossed(ev.timestamp) {
                let ranked = totals.top(max_rank);
                #[cfg(feature = "tracing")]
                tracing::trace!(at = %ev.timestamp, ranked = ranked.len(), "cohort snapshot");
                for (actor, total) in ranked {
                    cohort.upsert(actor, total);
                }
            }
            Ok::<_, TallyError>((cohort, totals, tracker))
        },
    )?;
    #[cfg(feature = "tracing")]
    tracing::debug!(members = cohort.len(), "cohort selected");
    Ok(cohort)
}
