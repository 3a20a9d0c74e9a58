//! Time-series stages of the leaderboard pipeline.
//!
//! Modules include:
//! - `boundary`: day-key computation and crossing detection
//! - `cohort`: "ever top-N" cohort selection
//! - `series`: dense running-total histories aligned to day boundaries
//! - `span`: trimming of flat leading/trailing runs
/// Day-boundary detection shared by the cohort and series stages.
pub mod boundary;
/// Cohort selection over the full event log.
pub mod cohort;
/// Dense daily histories for cohort members.
pub mod series;
/// Span trimming of a single history.
pub mod span;
mod totals;
