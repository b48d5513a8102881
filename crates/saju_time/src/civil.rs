//! Civil calendar date and wall-clock time.
//!
//! Provides `CivilDate`, `CivilTime` and `Moment`, the validated value types
//! used throughout the engine. All day arithmetic is proleptic Gregorian and
//! ignores time zones: a `CivilDate` is already resolved to the caller's
//! civil calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct CivilDate {
    inner: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawDate> for CivilDate {
    type Error = TimeError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<CivilDate> for RawDate {
    fn from(d: CivilDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl CivilDate {
    /// Build a date, rejecting month/day combinations that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|inner| Self { inner })
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.inner.year()
    }

    pub fn month(self) -> u32 {
        self.inner.month()
    }

    pub fn day(self) -> u32 {
        self.inner.day()
    }

    /// 1-based day of the year (1..=366).
    pub fn day_of_year(self) -> u32 {
        self.inner.ordinal()
    }

    /// Weekday with Sunday = 0 .. Saturday = 6.
    pub fn weekday(self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.inner.signed_duration_since(self.inner).num_days()
    }

    /// Days from CE, with 0001-01-01 = 1.
    pub fn days_from_ce(self) -> i64 {
        self.inner.num_days_from_ce() as i64
    }

    /// Shift by a signed number of days.
    ///
    /// Returns `None` only when the result leaves chrono's supported range.
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.inner
            .checked_add_signed(chrono::Duration::days(days))
            .map(|inner| Self { inner })
    }

    /// Compact numeric form `yyyymmdd`, e.g. 2024-03-05 -> 20240305.
    pub fn as_ymd_number(self) -> i64 {
        self.year() as i64 * 10_000 + self.month() as i64 * 100 + self.day() as i64
    }

    pub fn as_naive(self) -> NaiveDate {
        self.inner
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(inner: NaiveDate) -> Self {
        Self { inner }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| TimeError::Parse(format!("date '{s}': {e}")))?;
        Self::new(d.year(), d.month(), d.day())
    }
}

/// A validated wall-clock time with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTime", into = "RawTime")]
pub struct CivilTime {
    hour: u32,
    minute: u32,
}

#[derive(Serialize, Deserialize)]
struct RawTime {
    hour: u32,
    minute: u32,
}

impl TryFrom<RawTime> for CivilTime {
    type Error = TimeError;

    fn try_from(raw: RawTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl From<CivilTime> for RawTime {
    fn from(t: CivilTime) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
        }
    }
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Midnight, 00:00.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes since midnight (0..1440).
    pub fn minute_of_day(self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Inverse of [`minute_of_day`](Self::minute_of_day); input is reduced mod 1440.
    pub fn from_minute_of_day(total: u32) -> Self {
        let total = total % MINUTES_PER_DAY as u32;
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| TimeError::Parse(format!("time '{s}': {e}")))?;
        Self::new(t.hour(), t.minute())
    }
}

/// A reference moment: civil date plus wall-clock time in one fixed zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Moment {
    pub date: CivilDate,
    pub time: CivilTime,
}

impl Moment {
    pub fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Convenience constructor validating every field.
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        Ok(Self {
            date: CivilDate::new(year, month, day)?,
            time: CivilTime::new(hour, minute)?,
        })
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl FromStr for Moment {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDTHH:MM`, or a bare date meaning midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once(['T', ' ']) {
            Some((d, t)) => Ok(Self::new(d.parse()?, t.parse()?)),
            None => Ok(Self::new(s.parse()?, CivilTime::MIDNIGHT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_date() {
        let d = CivilDate::new(2024, 2, 29).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
    }

    #[test]
    fn rejects_non_leap_feb_29() {
        assert_eq!(
            CivilDate::new(2023, 2, 29),
            Err(TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn rejects_month_13() {
        assert!(CivilDate::new(2024, 13, 1).is_err());
        assert!(CivilDate::new(2024, 0, 1).is_err());
    }

    #[test]
    fn rejects_day_zero_and_31_in_april() {
        assert!(CivilDate::new(2024, 4, 0).is_err());
        assert!(CivilDate::new(2024, 4, 31).is_err());
    }

    #[test]
    fn day_of_year_bounds() {
        assert_eq!(CivilDate::new(2024, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CivilDate::new(2024, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(CivilDate::new(2023, 12, 31).unwrap().day_of_year(), 365);
    }

    #[test]
    fn weekday_sunday_is_zero() {
        // 2024-03-17 was a Sunday
        assert_eq!(CivilDate::new(2024, 3, 17).unwrap().weekday(), 0);
        assert_eq!(CivilDate::new(2024, 3, 23).unwrap().weekday(), 6);
    }

    #[test]
    fn days_until_signed() {
        let a = CivilDate::new(1900, 1, 1).unwrap();
        let b = CivilDate::new(1900, 3, 1).unwrap();
        assert_eq!(a.days_until(b), 59);
        assert_eq!(b.days_until(a), -59);
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365).unwrap(), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn ymd_number() {
        assert_eq!(CivilDate::new(2024, 3, 5).unwrap().as_ymd_number(), 20_240_305);
    }

    #[test]
    fn parse_and_display_date() {
        let d: CivilDate = "1990-07-04".parse().unwrap();
        assert_eq!(d.to_string(), "1990-07-04");
        assert!("1990/07/04".parse::<CivilDate>().is_err());
        assert!("1990-02-30".parse::<CivilDate>().is_err());
        assert!(matches!("1990-07".parse::<CivilDate>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn parse_and_display_time() {
        let t: CivilTime = " 07:05 ".parse().unwrap();
        assert_eq!(t, CivilTime::new(7, 5).unwrap());
        assert_eq!(t.to_string(), "07:05");
        assert!("24:00".parse::<CivilTime>().is_err());
        assert!("12:60".parse::<CivilTime>().is_err());
        assert!(matches!("noon".parse::<CivilTime>(), Err(TimeError::Parse(_))));
    }

    #[test]
    fn time_validation() {
        assert!(CivilTime::new(23, 59).is_ok());
        assert_eq!(
            CivilTime::new(24, 0),
            Err(TimeError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(CivilTime::new(12, 60).is_err());
    }

    #[test]
    fn minute_of_day_roundtrip() {
        let t = CivilTime::new(13, 45).unwrap();
        assert_eq!(t.minute_of_day(), 825);
        assert_eq!(CivilTime::from_minute_of_day(825), t);
        assert_eq!(CivilTime::from_minute_of_day(1440), CivilTime::MIDNIGHT);
    }

    #[test]
    fn parse_moment() {
        let m: Moment = "2024-03-20T07:05".parse().unwrap();
        assert_eq!(m.date, CivilDate::new(2024, 3, 20).unwrap());
        assert_eq!(m.time, CivilTime::new(7, 5).unwrap());
        assert_eq!(m.to_string(), "2024-03-20T07:05");

        let bare: Moment = "2024-03-20".parse().unwrap();
        assert_eq!(bare.time, CivilTime::MIDNIGHT);
    }

    #[test]
    fn serde_rejects_invalid_date() {
        let ok: CivilDate = serde_json::from_str(r#"{"year":2024,"month":2,"day":29}"#).unwrap();
        assert_eq!(ok.day(), 29);
        let bad: Result<CivilDate, _> =
            serde_json::from_str(r#"{"year":2023,"month":2,"day":29}"#);
        assert!(bad.is_err());
    }
}
