//! Error types for civil date/time validation.

use thiserror::Error;

/// Errors from validating or parsing calendar input.
///
/// Calendar fields are never clamped: an impossible date is rejected here
/// rather than silently moved to the nearest valid one.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1-12, or day outside the valid range for that month.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour outside 0-23 or minute outside 0-59.
    #[error("invalid time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Longitude not finite or outside [-180, 180].
    #[error("invalid longitude: {0}")]
    InvalidLongitude(f64),
    /// Clock offset larger than one day in either direction.
    #[error("solar-time offset out of range: {0} min")]
    OffsetOutOfRange(i32),
    /// Text input could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}
