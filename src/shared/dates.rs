//! Lenient ISO 8601 date input.
//!
//! Clients send either a full RFC 3339 timestamp or a bare calendar date.
//! A bare date (or a timestamp without offset) is read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer};

pub fn parse_iso_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn deserialize_iso_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_datetime(&raw)
        .ok_or_else(|| D::Error::custom(format!("invalid ISO 8601 date: {}", raw)))
}

pub fn deserialize_opt_iso_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_iso_datetime(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid ISO 8601 date: {}", raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        assert_eq!(
            parse_iso_datetime("2024-05-01T09:30:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_bare_date_is_midnight_utc() {
        assert_eq!(
            parse_iso_datetime("2023-05-01"),
            Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        assert_eq!(
            parse_iso_datetime("2023-05-01T14:05:00"),
            Some(Utc.with_ymd_and_hms(2023, 5, 1, 14, 5, 0).unwrap())
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_iso_datetime("yesterday"), None);
        assert_eq!(parse_iso_datetime("2023-13-01"), None);
    }
}
