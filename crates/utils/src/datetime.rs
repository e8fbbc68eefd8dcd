//! Lenient timestamp parsing for client-supplied dates.
//!
//! The browser client sends due dates as `YYYY-MM-DD HH:MM:SS`, while other callers
//! send RFC 3339. Both are accepted; values without an offset are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid timestamp: {0:?}")]
pub struct TimestampParseError(pub String);

pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TimestampParseError(input.to_string()))
}

/// `#[serde(deserialize_with = "utils::datetime::deserialize")]`
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Optional variant for patch payloads; a missing field or `null` stays `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_space_separated() {
        let dt = parse_timestamp("2024-01-01 10:00:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 1, 1));
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let dt = parse_timestamp("2024-03-05T12:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_timestamp("2024-02-29").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (2, 29, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("next tuesday").is_err());
        assert!(parse_timestamp("2024-13-01 00:00:00").is_err());
    }

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_option")]
        due_date: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_deserialize_option_missing_and_null() {
        let missing: Patch = serde_json::from_str("{}").unwrap();
        assert!(missing.due_date.is_none());
        let null: Patch = serde_json::from_str(r#"{"due_date": null}"#).unwrap();
        assert!(null.due_date.is_none());
        let set: Patch = serde_json::from_str(r#"{"due_date": "2024-01-01 10:00:00"}"#).unwrap();
        assert_eq!(set.due_date.unwrap().hour(), 10);
    }
}
