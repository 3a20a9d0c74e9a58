//! Conversion of raw `(uid, quantity, timestamp, actor)` records into events.
//!
//! Records arrive as string fields from whatever storage layer the caller
//! uses. The first malformed field aborts the whole batch; rows are never
//! skipped.

use chrono::NaiveDateTime;

use crate::{Event, TallyError};

/// Timestamp layout expected in the third field of every record.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 4;

const COL_QUANTITY: usize = 1;
const COL_TIME: usize = 2;
const COL_ACTOR: usize = 3;

/// Parse a timestamp field in [`TIME_FORMAT`].
///
/// The field must match the layout exactly; surrounding whitespace is rejected.
///
/// # Errors
/// Returns `Err(TallyError::MalformedTimestamp)` if `value` does not match the layout.
pub fn parse_timestamp(row: usize, value: &str) -> Result<NaiveDateTime, TallyError> {
    NaiveDateTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| TallyError::malformed_timestamp(row, value))
}

/// Parse a quantity field as a non-negative integer.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `Err(TallyError::InvalidQuantity)` for empty, negative, fractional,
/// or otherwise non-integer input, and for values that overflow `u64`.
pub fn parse_quantity(row: usize, value: &str) -> Result<u64, TallyError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| TallyError::invalid_quantity(row, value))
}

/// Parse a single 4-field record. The first field (a record id) is ignored.
///
/// Whitespace handling differs per field. The quantity tolerates surrounding
/// whitespace, the timestamp must match [`TIME_FORMAT`] exactly, and the actor
/// name is kept verbatim, so `"bob"` and `" bob"` are different actors.
///
/// # Errors
/// - `TallyError::MalformedRecord` if the record does not have exactly four fields.
/// - `TallyError::InvalidQuantity` if the quantity field is not a non-negative integer.
/// - `TallyError::MalformedTimestamp` if the timestamp field cannot be parsed.
pub fn parse_record<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<Event, TallyError> {
    if fields.len() != FIELD_COUNT {
        return Err(TallyError::malformed_record(row, fields.len()));
    }
    let quantity = parse_quantity(row, fields[COL_QUANTITY].as_ref())?;
    let timestamp = parse_timestamp(row, fields[COL_TIME].as_ref())?;
    Ok(Event::new(fields[COL_ACTOR].as_ref(), quantity, timestamp))
}

/// Parse every record, in order, failing on the first bad row.
///
/// An empty input yields an empty event list.
///
/// # Errors
/// Propagates the first error returned by [`parse_record`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "tally_core::ingest::parse_records", skip(rows))
)]
pub fn parse_records<I, R, S>(rows: I) -> Result<Vec<Event>, TallyError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let events = rows
        .into_iter()
        .enumerate()
        .map(|(row, fields)| parse_record(row, fields.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    #[cfg(feature = "tracing")]
    tracing::debug!(events = events.len(), "parsed records");
    Ok(events)
}
