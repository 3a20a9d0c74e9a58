use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::DayBoundary;

/// The value compared between consecutive events to detect a new day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKey {
    /// Day-of-month only (1-31).
    DayOfMonth(u32),
    /// Full calendar date.
    Date(NaiveDate),
}

impl DayKey {
    /// Compute the key of `ts` under `mode`.
    #[must_use]
    pub fn of(ts: NaiveDateTime, mode: DayBoundary) -> Self {
        match mode {
            DayBoundary::CalendarDate => Self::Date(ts.date()),
            _ => Self::DayOfMonth(ts.day()),
        }
    }
}

/// Tracks the previous event's day key and reports crossings.
///
/// The very first observation is always a crossing. Both the cohort selector
/// and the series builder drive one of these so they agree on where days
/// start.
#[derive(Debug, Clone)]
pub struct BoundaryTracker {
    mode: DayBoundary,
    prev: Option<DayKey>,
}

impl BoundaryTracker {
    /// A tracker that has not seen any event yet.
    #[must_use]
    pub const fn new(mode: DayBoundary) -> Self {
        Self { mode, prev: None }
    }

    /// Record `ts` and return whether its day key differs from the previous one.
    pub fn crossed(&mut self, ts: NaiveDateTime) -> bool {
        let key = DayKey::of(ts, self.mode);
        let crossed = self.prev != Some(key);
        self.prev = Some(key);
        crossed
    }

    /// The mode this tracker compares with.
    #[must_use]
    pub const fn mode(&self) -> DayBoundary {
        self.mode
    }
}
