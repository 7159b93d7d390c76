use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{BudgeterError, Result};

/// The canonical date layout, month and day without zero padding.
pub const DATE_LAYOUT: &str = "M/D/YYYY";

const YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// A transaction date, held as seconds since the Unix epoch.
///
/// Values are only created through [`Date::parse`] or [`Date::from_unix`],
/// both of which guarantee the instant is representable as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i64);

impl Date {
    /// Parse `M/D/YYYY` (e.g. `7/8/2021` or `07/08/2021`) as midnight UTC.
    pub fn parse(raw: &str) -> Result<Date> {
        let date = parse_mdy(raw).ok_or_else(|| BudgeterError::MalformedDate {
            input: raw.to_string(),
            layout: DATE_LAYOUT,
        })?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| BudgeterError::MalformedDate {
                input: raw.to_string(),
                layout: DATE_LAYOUT,
            })?;
        Ok(Date(midnight.and_utc().timestamp()))
    }

    /// Wrap a stored Unix timestamp. The instant must fall in a year the
    /// canonical layout can write back, 0000 through 9999.
    pub fn from_unix(secs: i64) -> Result<Date> {
        DateTime::from_timestamp(secs, 0)
            .filter(|dt| YEARS.contains(&dt.year()))
            .map(|_| Date(secs))
            .ok_or_else(|| BudgeterError::MalformedDate {
                input: secs.to_string(),
                layout: "Unix seconds",
            })
    }

    pub fn unix(self) -> i64 {
        self.0
    }

    fn naive(self) -> Option<NaiveDate> {
        DateTime::from_timestamp(self.0, 0).map(|dt| dt.date_naive())
    }
}

fn parse_mdy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let (m, d, y) = (parts[0], parts[1], parts[2]);
    let short = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    if !short(m) || !short(d) || y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// Render a calendar date in the canonical layout. The year is always four
/// digits.
pub(crate) fn canonical(date: NaiveDate) -> String {
    format!("{}/{}/{:04}", date.month(), date.day(), date.year())
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.naive() {
            Some(date) => f.write_str(&canonical(date)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Date {
    type Err = BudgeterError;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse(s)
    }
}
