//! Civil calendar values and local solar-time correction.
//!
//! This crate provides:
//! - Validated civil date/time types (`CivilDate`, `CivilTime`, `Moment`)
//! - Proleptic day arithmetic, day-of-year and weekday
//! - Standard meridians for known civil time zones
//! - Longitude-based solar-time correction with day rollover
//!
//! No I/O and no ambient clock: every function is a pure mapping of its inputs.

pub mod civil;
pub mod error;
pub mod meridian;
pub mod solar_time;

pub use civil::{CivilDate, CivilTime, MINUTES_PER_DAY, Moment};
pub use error::TimeError;
pub use meridian::{
    DEFAULT_TIMEZONE, KST_MERIDIAN_DEG, ZONE_OFFSETS, standard_meridian_deg, utc_offset_minutes,
};
pub use solar_time::{
    DayShift, SolarTimeCorrection, correct, longitude_offset_minutes, shift_clock,
    validate_longitude,
};
