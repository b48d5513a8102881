//! Horoscope selector driven by closed-form planetary signals.
//!
//! The signals are fast periodic approximations of the day of year, not an
//! ephemeris. They only serve to spread picks over a sign's phrase list.

use std::f64::consts::PI;

use saju_base::{ZodiacSign, normalize_360};
use serde::Serialize;

use crate::content::{HoroscopeEntry, HoroscopeTable};

/// Mean synodic month used for the moon phase, in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.5;

/// Text used when a sign has no horoscope entries.
pub const DEFAULT_HOROSCOPE_TEXT: &str = "별자리 운세를 불러올 수 없습니다.";

/// Approximate planetary state for a day of the year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetarySignals {
    /// Sun position in degrees [0, 360).
    pub sun_pos: f64,
    /// Moon phase in [0, 1).
    pub moon_phase: f64,
    pub mercury_retrograde: bool,
    pub jupiter_blessing: bool,
    pub saturn_challenge: bool,
    pub planetary_energy: i64,
}

pub fn planetary_signals(day_of_year: u32) -> PlanetarySignals {
    let doy = day_of_year as f64;
    let sun_pos = normalize_360(doy * 360.0 / 365.0);
    let moon_phase = (doy % SYNODIC_MONTH_DAYS) / SYNODIC_MONTH_DAYS;
    let mercury_retrograde = (doy * PI / 88.0).sin() < -0.8;
    let jupiter_blessing = (doy * 2.0 * PI / 365.0).cos() > 0.7;
    let saturn_challenge = (doy * 2.0 * PI / 365.0).sin() < -0.7;

    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    let planetary_energy = ((moon_phase - 0.5) * 10.0 + 5.0 * flag(jupiter_blessing)
        - 5.0 * flag(saturn_challenge)
        - 3.0 * flag(mercury_retrograde))
    .floor() as i64;

    PlanetarySignals {
        sun_pos,
        moon_phase,
        mercury_retrograde,
        jupiter_blessing,
        saturn_challenge,
        planetary_energy,
    }
}

/// `(doy + floor(sun/10) + floor(phase*10) + |energy|) mod count`.
///
/// `count` must be non-zero.
pub fn horoscope_index(day_of_year: u32, count: usize) -> usize {
    debug_assert!(count > 0);
    let s = planetary_signals(day_of_year);
    let raw = day_of_year as i64
        + (s.sun_pos / 10.0).floor() as i64
        + (s.moon_phase * 10.0).floor() as i64
        + s.planetary_energy.abs();
    raw.rem_euclid(count.max(1) as i64) as usize
}

/// The chosen horoscope phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoroscopePick {
    pub sign: ZodiacSign,
    pub keyword: String,
    pub content: String,
    /// False when the default text was substituted.
    pub from_table: bool,
}

impl HoroscopePick {
    fn default_for(sign: ZodiacSign) -> Self {
        Self {
            sign,
            keyword: String::new(),
            content: DEFAULT_HOROSCOPE_TEXT.to_string(),
            from_table: false,
        }
    }

    fn from_entry(sign: ZodiacSign, entry: &HoroscopeEntry) -> Self {
        Self {
            sign,
            keyword: entry.keyword.clone(),
            content: entry.content.clone(),
            from_table: true,
        }
    }
}

/// Pick the horoscope entry for `sign` on `day_of_year`.
pub fn select_horoscope(
    sign: ZodiacSign,
    day_of_year: u32,
    table: Option<&HoroscopeTable>,
) -> HoroscopePick {
    let Some(table) = table else {
        tracing::warn!("no horoscope table; using default text");
        return HoroscopePick::default_for(sign);
    };
    let entries = table.for_sign(sign);
    if entries.is_empty() {
        tracing::warn!(sign = sign.code(), "no horoscope entries for sign");
        return HoroscopePick::default_for(sign);
    }
    let index = horoscope_index(day_of_year, entries.len());
    tracing::debug!(sign = sign.code(), index, count = entries.len(), "horoscope picked");
    entries
        .get(index)
        .map_or_else(|| HoroscopePick::default_for(sign), |e| HoroscopePick::from_entry(sign, e))
}
