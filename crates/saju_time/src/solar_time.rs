//! Local apparent (solar) time correction from longitude.
//!
//! The sun crosses a meridian 4 minutes later for every degree further west.
//! Shifting civil clock time by `(longitude - standard_meridian) * 4` minutes
//! gives the local solar time, which may fall on the previous or next civil
//! day. Callers must apply [`DayShift`] to the civil date before deriving a
//! day pillar from it.

use serde::{Deserialize, Serialize};

use crate::civil::{CivilDate, CivilTime, MINUTES_PER_DAY};
use crate::error::TimeError;

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Day rollover produced by the correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayShift {
    /// Corrected time fell before midnight of the civil day.
    Previous,
    /// Corrected time stayed within the civil day.
    Same,
    /// Corrected time passed the following midnight.
    Next,
}

impl DayShift {
    /// Signed day offset: -1, 0 or +1.
    pub const fn days(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Same => 0,
            Self::Next => 1,
        }
    }
}

/// Result of a solar-time correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTimeCorrection {
    /// Corrected wall-clock time.
    pub time: CivilTime,
    /// Rollover to apply to the civil date.
    pub day_shift: DayShift,
    /// Applied offset in whole minutes (positive east of the meridian).
    pub offset_minutes: i32,
}

impl SolarTimeCorrection {
    /// A correction that changes nothing.
    pub fn identity(time: CivilTime) -> Self {
        Self {
            time,
            day_shift: DayShift::Same,
            offset_minutes: 0,
        }
    }

    /// Apply the day shift to a civil date.
    ///
    /// Returns `None` only at the edge of the supported calendar range.
    pub fn shift_date(&self, date: CivilDate) -> Option<CivilDate> {
        date.add_days(self.day_shift.days())
    }
}

/// Validate a geographic longitude in degrees (east positive).
pub fn validate_longitude(longitude_deg: f64) -> Result<f64, TimeError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::InvalidLongitude(longitude_deg));
    }
    Ok(longitude_deg)
}

/// Clock offset in whole minutes for a longitude relative to a meridian.
///
/// Rounded to the nearest minute.
pub fn longitude_offset_minutes(longitude_deg: f64, reference_meridian_deg: f64) -> i32 {
    ((longitude_deg - reference_meridian_deg) * MINUTES_PER_DEGREE).round() as i32
}

/// Shift a clock time by a signed number of minutes, wrapping into one day.
///
/// `offset_minutes` must lie in `-1440..=1440`, which keeps the rollover
/// within one day either way.
pub fn shift_clock(
    time: CivilTime,
    offset_minutes: i32,
) -> Result<SolarTimeCorrection, TimeError> {
    if !(-MINUTES_PER_DAY..=MINUTES_PER_DAY).contains(&offset_minutes) {
        return Err(TimeError::OffsetOutOfRange(offset_minutes));
    }
    let raw = time.minute_of_day() as i32 + offset_minutes;
    let day_shift = match raw.div_euclid(MINUTES_PER_DAY) {
        -1 => DayShift::Previous,
        0 => DayShift::Same,
        _ => DayShift::Next,
    };
    let wrapped = raw.rem_euclid(MINUTES_PER_DAY) as u32;
    Ok(SolarTimeCorrection {
        time: CivilTime::from_minute_of_day(wrapped),
        day_shift,
        offset_minutes,
    })
}

/// Correct a civil clock time to local solar time at `longitude_deg`.
///
/// `reference_meridian_deg` is the standard meridian of the civil zone the
/// clock time is expressed in (see [`crate::standard_meridian_deg`]). Both
/// angles must be finite longitudes in [-180, 180].
pub fn correct(
    time: CivilTime,
    longitude_deg: f64,
    reference_meridian_deg: f64,
) -> Result<SolarTimeCorrection, TimeError> {
    let longitude_deg = validate_longitude(longitude_deg)?;
    let reference_meridian_deg = validate_longitude(reference_meridian_deg)?;
    shift_clock(time, longitude_offset_minutes(longitude_deg, reference_meridian_deg))
}
