//! Birth profile input.
//!
//! The birth clock and the birth longitude are optional. Solar-time
//! correction needs both, so the three usable shapes are modelled as
//! [`BirthInstant`] and the orchestrator branches on it exactly once.

use saju_time::{CivilDate, CivilTime, validate_longitude};
use serde::{Deserialize, Serialize};

use crate::error::FortuneError;

/// What is known about the moment of birth beyond the date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BirthInstant {
    /// Date only; no clock time.
    DateOnly,
    /// Clock time without a location; no solar-time correction.
    Clock(CivilTime),
    /// Clock time and longitude (degrees east); solar-time correction applies.
    Located { time: CivilTime, longitude_deg: f64 },
}

impl BirthInstant {
    /// Civil clock time as entered, if known.
    pub fn clock(&self) -> Option<CivilTime> {
        match *self {
            Self::DateOnly => None,
            Self::Clock(time) | Self::Located { time, .. } => Some(time),
        }
    }

    pub fn longitude_deg(&self) -> Option<f64> {
        match *self {
            Self::Located { longitude_deg, .. } => Some(longitude_deg),
            _ => None,
        }
    }
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthProfileInput", into = "BirthProfileInput")]
pub struct BirthProfile {
    date: CivilDate,
    instant: BirthInstant,
    timezone_id: Option<String>,
}

impl BirthProfile {
    /// Profile from a validated date and instant. Longitudes are checked.
    pub fn new(
        date: CivilDate,
        instant: BirthInstant,
        timezone_id: Option<String>,
    ) -> Result<Self, FortuneError> {
        if let BirthInstant::Located { longitude_deg, .. } = instant {
            validate_longitude(longitude_deg)?;
        }
        Ok(Self {
            date,
            instant,
            timezone_id,
        })
    }

    pub fn date_only(date: CivilDate) -> Self {
        Self {
            date,
            instant: BirthInstant::DateOnly,
            timezone_id: None,
        }
    }

    /// Profile from loose fields.
    ///
    /// A missing hour means no clock time; a missing minute with an hour
    /// present means minute 0. A longitude without a clock time is dropped.
    pub fn from_fields(
        year: i32,
        month: u32,
        day: u32,
        hour: Option<u32>,
        minute: Option<u32>,
        longitude_deg: Option<f64>,
        timezone_id: Option<String>,
    ) -> Result<Self, FortuneError> {
        let date = CivilDate::new(year, month, day)?;
        let clock = match hour {
            Some(h) => Some(CivilTime::new(h, minute.unwrap_or(0))?),
            None => None,
        };
        let instant = match (clock, longitude_deg) {
            (None, lon) => {
                if lon.is_some() {
                    tracing::debug!("birth longitude given without clock time; ignored");
                }
                BirthInstant::DateOnly
            }
            (Some(time), None) => BirthInstant::Clock(time),
            (Some(time), Some(longitude_deg)) => BirthInstant::Located {
                time,
                longitude_deg,
            },
        };
        Self::new(date, instant, timezone_id)
    }

    pub fn date(&self) -> CivilDate {
        self.date
    }

    pub fn instant(&self) -> BirthInstant {
        self.instant
    }

    /// Civil timezone the birth clock is expressed in, if given.
    pub fn timezone_id(&self) -> Option<&str> {
        self.timezone_id.as_deref()
    }

    /// `year*10000 + month*100 + day`.
    pub fn date_seed(&self) -> i64 {
        self.date.as_ymd_number()
    }

    /// Birth clock as minutes after midnight, 0 when unknown.
    pub fn minute_of_day(&self) -> u32 {
        self.instant.clock().map_or(0, CivilTime::minute_of_day)
    }
}

/// Flat wire form of a birth profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthProfileInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_id: Option<String>,
}

impl TryFrom<BirthProfileInput> for BirthProfile {
    type Error = FortuneError;

    fn try_from(raw: BirthProfileInput) -> Result<Self, Self::Error> {
        Self::from_fields(
            raw.year,
            raw.month,
            raw.day,
            raw.hour,
            raw.minute,
            raw.longitude,
            raw.timezone_id,
        )
    }
}

impl From<BirthProfile> for BirthProfileInput {
    fn from(p: BirthProfile) -> Self {
        let clock = p.instant.clock();
        Self {
            year: p.date.year(),
            month: p.date.month(),
            day: p.date.day(),
            hour: clock.map(CivilTime::hour),
            minute: clock.map(CivilTime::minute),
            longitude: p.instant.longitude_deg(),
            timezone_id: p.timezone_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_time::TimeError;

    #[test]
    fn date_only_when_no_hour() {
        let p = BirthProfile::from_fields(1990, 5, 15, None, Some(30), None, None).unwrap();
        assert_eq!(p.instant(), BirthInstant::DateOnly);
        assert_eq!(p.minute_of_day(), 0);
    }

    #[test]
    fn clock_without_longitude() {
        let p = BirthProfile::from_fields(1990, 5, 15, Some(14), Some(30), None, None).unwrap();
        assert_eq!(
            p.instant(),
            BirthInstant::Clock(CivilTime::new(14, 30).unwrap())
        );
        assert_eq!(p.minute_of_day(), 870);
    }

    #[test]
    fn longitude_without_clock_is_dropped() {
        let p = BirthProfile::from_fields(1990, 5, 15, None, None, Some(127.0), None).unwrap();
        assert_eq!(p.instant(), BirthInstant::DateOnly);
    }

    #[test]
    fn located() {
        let p =
            BirthProfile::from_fields(1990, 5, 15, Some(23), None, Some(126.98), None).unwrap();
        assert_eq!(p.instant().longitude_deg(), Some(126.98));
        assert_eq!(p.instant().clock(), Some(CivilTime::new(23, 0).unwrap()));
    }

    #[test]
    fn rejects_bad_month() {
        let e = BirthProfile::from_fields(1990, 13, 1, None, None, None, None).unwrap_err();
        assert!(matches!(
            e,
            FortuneError::Validation(TimeError::InvalidDate { month: 13, .. })
        ));
    }

    #[test]
    fn rejects_feb_30() {
        assert!(BirthProfile::from_fields(2023, 2, 30, None, None, None, None).is_err());
    }

    #[test]
    fn rejects_bad_longitude() {
        let e = BirthProfile::from_fields(1990, 5, 15, Some(1), Some(0), Some(200.0), None)
            .unwrap_err();
        assert!(matches!(e, FortuneError::Validation(TimeError::InvalidLongitude(_))));
    }

    #[test]
    fn json_round_trip() {
        let json = r#"{
            "year": 1990, "month": 5, "day": 15, "hour": 6, "minute": 5,
            "longitude": 129.0, "timezoneId": "Asia/Seoul"
        }"#;
        let p: BirthProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.timezone_id(), Some("Asia/Seoul"));
        assert_eq!(p.date_seed(), 19_900_515);
        let back: BirthProfile = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn json_rejects_invalid_day() {
        let json = r#"{"year":2023,"month":4,"day":31}"#;
        assert!(serde_json::from_str::<BirthProfile>(json).is_err());
    }
}
