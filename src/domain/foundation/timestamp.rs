//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
///
/// Capture is best-effort wall clock: per-writer insertion order is
/// non-decreasing, but no ordering is guaranteed across concurrent writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Renders the timestamp as an ISO-8601 UTC string, the persisted form.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso8601_renders_utc_offset() {
        let ts = Timestamp::now();
        let rendered = ts.to_iso8601();
        assert!(rendered.ends_with("+00:00") || rendered.ends_with('Z'));
    }

    #[test]
    fn now_is_non_decreasing() {
        let a = Timestamp::now();
        let b = Timestamp::now();
        assert!(a <= b);
    }
}
