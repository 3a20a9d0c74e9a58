//! Configuration types consumed by the cohort selector and series builder.

use serde::{Deserialize, Serialize};

/// Default number of leaderboard places tracked per day.
pub const DEFAULT_MAX_RANK: usize = 10;

/// How a "new day" is detected between two consecutive events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum DayBoundary {
    /// Compare only the day-of-month (1-31).
    ///
    /// This aliases across months: 31 -> 1 is a crossing, but two events on
    /// the 5th of consecutive months with nothing in between are treated as
    /// the same day. Kept as the default so existing leaderboards reproduce
    /// exactly.
    #[default]
    DayOfMonth,
    /// Compare the full calendar date.
    CalendarDate,
}

/// Configuration for a leaderboard run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Number of places considered "top" at each day boundary. Must be >= 1.
    #[serde(default = "TallyConfig::default_max_rank")]
    pub max_rank: usize,
    /// Day-boundary detection mode.
    #[serde(default)]
    pub day_boundary: DayBoundary,
}

impl TallyConfig {
    const fn default_max_rank() -> usize {
        DEFAULT_MAX_RANK
    }
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            max_rank: DEFAULT_MAX_RANK,
            day_boundary: DayBoundary::default(),
        }
    }
}
