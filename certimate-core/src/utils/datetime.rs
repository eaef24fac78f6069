//! Record timestamp (de)serialization.
//!
//! Timestamps are written as RFC3339. Reading also accepts the
//! space-separated form the record backend emits
//! (`2024-05-01 08:30:00.123Z`) and Unix timestamps in seconds or
//! milliseconds.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Backend timestamp layout (UTC, space separator, optional fraction).
const BACKEND_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.fZ";

/// Above this value a Unix timestamp is taken as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Number(i64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(s) => parse_text(&s)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        RawTimestamp::Number(ts) => {
            parse_unix(ts).ok_or_else(|| Error::custom(format!("Invalid Unix timestamp: {ts}")))
        }
    }
}

/// Parses RFC3339 or the backend layout.
pub fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, BACKEND_FORMAT)
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn parse_unix(ts: i64) -> Option<DateTime<Utc>> {
    if ts > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
