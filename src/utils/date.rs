//! Front-matter date parsing under a fixed UTC policy.
//!
//! Every date is bucketed in UTC, independent of the machine running the build:
//!
//! | Input | Interpretation |
//! |-------|----------------|
//! | `2024-01-05` | midnight UTC |
//! | `2024-01-05T08:00:00Z`, `2024-01-05T08:00:00+02:00` | converted to UTC |
//! | `2024-01-05T08:00:00`, `2024-01-05 08:00` | taken as UTC |

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// Timestamp layouts with an offset that RFC 3339 rejects (no seconds, or
/// `+hhmm`). A trailing `Z` is rewritten to `+00:00` before these are tried.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Timestamp layouts without an offset, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Why a date could not be bucketed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date is empty")]
    Empty,

    #[error("unrecognized date `{0}`")]
    Unrecognized(String),

    #[error("year {0} is outside 0000..=9999")]
    YearOutOfRange(i32),
}

/// Calendar year and month of a date, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: u16,
    pub month: u8,
}

impl YearMonth {
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Result<Self, DateError> {
        let year = datetime.year();
        let year = u16::try_from(year)
            .ok()
            .filter(|y| *y <= 9999)
            .ok_or(DateError::YearOutOfRange(year))?;
        // chrono months are 1..=12
        Ok(Self {
            year,
            month: datetime.month() as u8,
        })
    }

    /// Parse a front-matter date and bucket it.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        Self::from_datetime(&parse_utc(s)?)
    }

    /// Four-digit year key, e.g. `"2024"`.
    pub fn year_key(self) -> String {
        format!("{:04}", self.year)
    }

    /// Zero-padded month key, e.g. `"01"`.
    pub fn month_key(self) -> String {
        format!("{:02}", self.month)
    }
}

/// Parse a date or timestamp string into a UTC instant.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, DateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(datetime.with_timezone(&Utc));
    }

    let zoned = s
        .strip_suffix(['Z', 'z'])
        .map_or_else(|| s.to_owned(), |rest| format!("{rest}+00:00"));
    if let Some(datetime) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&zoned, format).ok())
    {
        return Ok(datetime.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DateError::Unrecognized(s.to_owned()))
}
