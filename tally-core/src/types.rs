//! Re-export of foundational types from `tally-types`.
// Consolidated re-exports so downstream crates can depend on `tally-core` only

pub use tally_types::{DEFAULT_MAX_RANK, DayBoundary, TallyConfig, TallyError};
