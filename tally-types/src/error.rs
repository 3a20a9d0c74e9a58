use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tally workspace.
///
/// Parse failures carry the zero-based index of the offending input record so
/// callers can point at the exact row. Every variant is fatal for a run: the
/// pipeline never skips rows, since a dropped event would corrupt the running
/// totals of every later day.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TallyError {
    /// A timestamp field did not match `%Y-%m-%d %H:%M:%S`.
    #[error("malformed timestamp at row {row}: {value:?}")]
    MalformedTimestamp {
        /// Zero-based record index.
        row: usize,
        /// The raw field contents.
        value: String,
    },

    /// A quantity field was not a non-negative integer.
    #[error("invalid quantity at row {row}: {value:?}")]
    InvalidQuantity {
        /// Zero-based record index.
        row: usize,
        /// The raw field contents.
        value: String,
    },

    /// A record did not carry the expected number of fields.
    #[error("malformed record at row {row}: expected 4 fields, got {fields}")]
    MalformedRecord {
        /// Zero-based record index.
        row: usize,
        /// Number of fields actually present.
        fields: usize,
    },

    /// Invalid configuration or argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Derived data broke one of its structural invariants.
    #[error("data issue: {0}")]
    Data(String),
}

impl TallyError {
    /// Helper: build a `MalformedTimestamp` error for a record.
    pub fn malformed_timestamp(row: usize, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            row,
            value: value.into(),
        }
    }

    /// Helper: build an `InvalidQuantity` error for a record.
    pub fn invalid_quantity(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            row,
            value: value.into(),
        }
    }

    /// Helper: build a `MalformedRecord` error for a record.
    #[must_use]
    pub const fn malformed_record(row: usize, fields: usize) -> Self {
        Self::MalformedRecord { row, fields }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// The input row this error refers to, if any.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedTimestamp { row, .. }
            | Self::InvalidQuantity { row, .. }
            | Self::MalformedRecord { row, .. } => Some(*row),
            Self::InvalidArg(_) | Self::Data(_) => None,
        }
    }
}
