use std::error::Error;
use std::path::Path;

use tally_core::{Event, TallyError, parse_record};
use tally_mock::MockLog;

/// Install a human-friendly tracing subscriber with env-based filtering.
///
/// Suggested: `RUST_LOG=info,tally=debug,tally_core=trace`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// Read a headerless `uid,quantity,timestamp,actor` CSV file into events.
///
/// Fields may be quoted, so actor names can contain commas. Blank lines are
/// skipped. Rows are numbered from zero in error reports.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid CSV, or the
/// first record error from [`parse_record`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Event>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut events = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<&str> = record.iter().collect();
        events.push(parse_record(row, &fields)?);
    }
    Ok(events)
}

/// Load the event log for demos.
///
/// When `TALLY_DEMO_CSV` points at a file it is read with [`load_csv`].
/// Otherwise the bundled `fallback` mock log is used.
///
/// # Errors
/// Returns an error if the file cannot be read or any record fails to parse,
/// or if `fallback` is not a bundled mock log name.
pub fn load_events(fallback: &str) -> Result<Vec<Event>, Box<dyn Error>> {
    if let Ok(path) = std::env::var("TALLY_DEMO_CSV") {
        return load_csv(path);
    }
    println!("--- (Using mock log {fallback:?}) ---");
    let events = MockLog::new()
        .events(fallback)
        .ok_or_else(|| TallyError::invalid_arg(format!("unknown mock log {fallback:?}")))??;
    Ok(events)
}
