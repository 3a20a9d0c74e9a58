//! Tally builds daily top-N leaderboards from a chronological event log.
//!
//! Overview
//! - Selects the cohort of actors that ranked within the top `max_rank` by
//!   running total at any day boundary. Membership is never revoked.
//! - Builds one dense running-total series per cohort member, aligned to a
//!   shared list of day-boundary timestamps.
//! - Trims each series to the span where it actually changes, keeping one
//!   flat point before the first change.
//!
//! Key behaviors and trade-offs
//! - Day boundaries default to day-of-month comparison, which aliases across
//!   months; `DayBoundary::CalendarDate` compares full dates instead.
//! - A value at a boundary includes the event that opened the day; later
//!   same-day events show up at the next boundary.
//! - Any malformed record aborts the run. Rows are never skipped.
//!
//! Examples
//! ```rust
//! use tally::Tally;
//!
//! let tally = Tally::builder().max_rank(3).build()?;
//! let board = tally.run_records([
//!     ["1", "5", "2021-03-01 09:00:00", "ana"],
//!     ["2", "3", "2021-03-02 09:00:00", "ana"],
//! ])?;
//! assert_eq!(board.history("ana"), Some(&[5, 8][..]));
//! # Ok::<(), tally::TallyError>(())
//! ```
#![warn(missing_docs)]

mod core;
mod report;

pub use crate::core::{Tally, TallyBuilder};
pub use crate::report::{ActorSeries, Leaderboard};
pub use tally_core::{DayBoundary, Event, Span, TallyConfig, TallyError};
