//! tally-core
//!
//! Core types and algorithms for building daily top-N leaderboards from a
//! chronological log of consumption events.
//!
//! - `event`: the immutable `Event` record.
//! - `ingest`: parsing of raw 4-field records into events.
//! - `timeseries`: cohort selection, dense daily series, and span trimming.
//! - `style`: index-to-style helpers for renderers.
//!
//! Everything here is synchronous and single-pass; callers hand in the full
//! event log up front and receive owned outputs.
#![warn(missing_docs)]

/// The `Event` record consumed by every stage.
pub mod event;
/// Parsing of raw string records into events.
pub mod ingest;
/// Pure style-cycle helpers for renderers.
pub mod style;
/// Cohort selection, series alignment, and span trimming.
pub mod timeseries;
pub mod types;

pub use event::Event;
pub use ingest::{TIME_FORMAT, parse_record, parse_records};
pub use style::{LineStyle, color_position, legend_columns, linestyle_for};
pub use timeseries::boundary::{BoundaryTracker, DayKey};
pub use timeseries::cohort::{Cohort, select_cohort};
pub use timeseries::series::{DailySeries, History, build_series};
pub use timeseries::span::{Span, trim_span};
pub use types::*;
