use tally_core::{DayBoundary, Event, TallyConfig, TallyError};
use tally_core::{build_series, parse_records, select_cohort};

use crate::report::{ActorSeries, Leaderboard};

/// Builder for [`Tally`].
#[derive(Debug, Clone, Default)]
pub struct TallyBuilder {
    cfg: TallyConfig,
}

impl TallyBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: top 10 places, day-of-month boundary detection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of places considered "top" at each day boundary.
    #[must_use]
    pub const fn max_rank(mut self, max_rank: usize) -> Self {
        self.cfg.max_rank = max_rank;
        self
    }

    /// Day-boundary detection mode.
    ///
    /// `DayBoundary::DayOfMonth` reproduces historical leaderboards exactly;
    /// `DayBoundary::CalendarDate` fixes aliasing between months.
    #[must_use]
    pub const fn day_boundary(mut self, mode: DayBoundary) -> Self {
        self.cfg.day_boundary = mode;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    #[must_use]
    pub fn config(mut self, cfg: TallyConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Validate the configuration and build the engine.
    ///
    /// # Errors
    /// Returns `Err(TallyError::InvalidArg)` if `max_rank` is zero.
    pub fn build(self) -> Result<Tally, TallyError> {
        if self.cfg.max_rank == 0 {
            return Err(TallyError::invalid_arg("max_rank must be at least 1"));
        }
        Ok(Tally { cfg: self.cfg })
    }
}

/// Runs cohort selection, series building, and span trimming over an event log.
#[derive(Debug, Clone)]
pub struct Tally {
    cfg: TallyConfig,
}

impl Tally {
    /// Start building a new engine.
    #[must_use]
    pub fn builder() -> TallyBuilder {
        TallyBuilder::new()
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &TallyConfig {
        &self.cfg
    }

    /// Build the leaderboard for a chronological event log.
    ///
    /// The result is a pure function of `events` and the configuration. An
    /// empty log yields an empty leaderboard.
    ///
    /// # Errors
    /// Returns `Err(TallyError::Data)` if a running total overflows `u64` or a
    /// history does not line up with the day boundaries.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tally::core::run",
            skip(self, events),
            fields(events = events.len(), max_rank = self.cfg.max_rank),
        )
    )]
    pub fn run(&self, events: &[Event]) -> Result<Leaderboard, TallyError> {
        let mode = self.cfg.day_boundary;
        let cohort = select_cohort(events, self.cfg.max_rank, mode)?;
        let series = build_series(events, &cohort, mode)?;
        series.check_aligned()?;

        let histories = series
            .histories
            .into_iter()
            .map(|h| ActorSeries {
                span: h.span(),
                actor: h.actor,
                history: h.values,
            })
            .collect();

        let board = Leaderboard {
            day_boundaries: series.day_boundaries,
            cohort: cohort.into_entries(),
            histories,
        };
        #[cfg(feature = "tracing")]
        tracing::info!(
            members = board.cohort.len(),
            days = board.day_boundaries.len(),
            "leaderboard built"
        );
        Ok(board)
    }

    /// Parse raw `(uid, quantity, timestamp, actor)` records and build the leaderboard.
    ///
    /// # Errors
    /// Returns the first parse error (`MalformedRecord`, `InvalidQuantity`,
    /// `MalformedTimestamp`) without producing partial output, or any error
    /// from [`Tally::run`].
    pub fn run_records<I, R, S>(&self, rows: I) -> Result<Leaderboard, TallyError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let events = parse_records(rows)?;
        self.run(&events)
    }
}
