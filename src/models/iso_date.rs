//! ISO-8601 date codec
//!
//! Transaction dates are persisted as UTC timestamps like
//! `2023-09-01T00:00:00Z`. Sub-second digits are written only when present so
//! a load/save cycle reproduces the exact instant. Reading is lenient: any
//! RFC 3339 timestamp (with or without milliseconds, any offset) and bare
//! `YYYY-MM-DD` dates are accepted; the latter mean UTC midnight.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a timestamp the way it is persisted
pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse a persisted or user-typed date
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter: `#[serde(with = "iso_date")]`
pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(date))
}

/// Serde adapter: `#[serde(with = "iso_date")]`
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_format_whole_seconds() {
        let date = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(format(&date), "2023-09-01T00:00:00Z");
    }

    #[test]
    fn test_parse_accepts_browser_style_timestamps() {
        let parsed = parse("2023-09-05T00:00:00.000Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_bare_date_is_utc_midnight() {
        let parsed = parse("2023-09-10").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_normalises_offsets() {
        let parsed = parse("2023-09-10T02:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2023, 9, 10, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_sub_second_precision_survives() {
        let date = Utc
            .with_ymd_and_hms(2024, 2, 29, 13, 45, 7)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(parse(&format(&date)), Some(date));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_none());
        assert!(parse("2023-13-01").is_none());
    }
}
