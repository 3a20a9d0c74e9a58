//! Tally-specific error and configuration primitives shared across the workspace.
#![warn(missing_docs)]

mod config;
mod error;

pub use config::{DEFAULT_MAX_RANK, DayBoundary, TallyConfig};
pub use error::TallyError;
