//! Timestamp encoding. Every timestamp column holds RFC 3339 UTC with
//! millisecond precision and a `Z` suffix, the same shape SQLite's
//! `strftime('%Y-%m-%dT%H:%M:%fZ')` default produces, so text ordering is
//! chronological ordering.

use chrono::{DateTime, SecondsFormat, Utc};

use sentinel_core::errors::{SentinelResult, StorageError};

pub fn encode(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn decode(table: &str, raw: &str) -> SentinelResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::InvalidRow {
                table: table.to_string(),
                reason: format!("bad timestamp {raw:?}: {e}"),
            }
            .into()
        })
}
