use tally_core::{Event, TallyError, parse_records};

mod fixtures;

/// Deterministic event logs for tests and demos, addressed by name.
///
/// Rows use the raw `(uid, quantity, timestamp, actor)` layout so callers can
/// exercise ingest as well as the pipeline.
pub struct MockLog;

impl Default for MockLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLog {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Names of every bundled log.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        fixtures::NAMES
    }

    /// Raw records of a bundled log.
    #[must_use]
    pub fn rows(&self, name: &str) -> Option<&'static [[&'static str; 4]]> {
        fixtures::logs::by_name(name)
    }

    /// Parsed events of a bundled log.
    ///
    /// Returns `None` for an unknown name and `Some(Err(_))` for the logs
    /// that deliberately contain bad rows.
    #[must_use]
    pub fn events(&self, name: &str) -> Option<Result<Vec<Event>, TallyError>> {
        self.rows(name).map(parse_records)
    }
}
