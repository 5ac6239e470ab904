//! Normalization of heterogeneous remote date strings.
//!
//! The sandbox API is inconsistent about date formats: full ISO-8601
//! timestamps, offset timestamps without the colon, and bare dates all show
//! up. Malformed dates must never abort an otherwise-valid batch, so the
//! fallible parse is separated from the never-failing wrapper the pipeline
//! uses.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Attempts to parse a remote date string into a canonical UTC timestamp.
///
/// Tries, in order: strict RFC 3339 (`2024-03-02T10:00:00Z`), an offset
/// timestamp without the colon (`2024-03-02T10:00:00+0000`), and a bare
/// date (`2024-03-02`, taken as midnight UTC). The first successful parse
/// wins.
#[inline]
#[must_use]
pub fn try_parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

/// Parses a remote date string, falling back to the current wall-clock time.
///
/// The fallback is logged as a data-quality event; this function never
/// fails and never blocks the pipeline.
#[inline]
#[must_use]
pub fn parse_timestamp_or_now(raw: &str) -> DateTime<Utc> {
    try_parse_timestamp(raw).unwrap_or_else(|| {
        tracing::warn!(raw = %raw, "unparseable remote date, falling back to current time");
        Utc::now()
    })
}
