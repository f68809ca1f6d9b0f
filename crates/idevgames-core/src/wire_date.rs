//! Wire format for date-typed snippet fields.
//!
//! The API emits naive datetimes like `2020-02-14T00:00:00`. Older
//! payloads carry bare dates (`2020-02-14`) or UTC timestamps
//! (`2020-02-14T00:00:00Z`). Reads accept all three and keep the calendar
//! date exactly as written; no local time zone is ever applied. Writes
//! always emit the naive datetime form.

use jiff::Timestamp;
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::TimeZone;

use crate::error::CoreError;

pub fn parse_datetime(raw: &str) -> Result<DateTime, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime>() {
        return Ok(dt);
    }
    if let Ok(date) = raw.parse::<Date>() {
        return Ok(date.to_datetime(Time::midnight()));
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::UTC).datetime());
    }
    Err(CoreError::InvalidDate(raw.to_string()))
}

pub fn parse_date(raw: &str) -> Result<Date, CoreError> {
    parse_datetime(raw).map(|dt| dt.date())
}

/// `YYYY-MM-DDTHH:MM:SS`, with fractional seconds only when non-zero.
pub fn format_datetime(dt: DateTime) -> String {
    dt.to_string()
}

/// `YYYY-MM-DD`, the form used in forms and listings.
pub fn format_date(date: Date) -> String {
    date.to_string()
}

/// `#[serde(with = "wire_date::date")]` for calendar dates.
pub mod date {
    use jiff::civil::{Date, Time};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(date.to_datetime(Time::midnight())))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "wire_date::datetime")]` for audit timestamps.
pub mod datetime {
    use jiff::civil::DateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(*dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}
