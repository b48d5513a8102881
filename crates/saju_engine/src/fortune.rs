//! Orchestrator: composes every selector into one [`FortuneResult`].
//!
//! Order: today's pillar, the user's day stem (after solar-time correction
//! of the birth date when clock and longitude are known), zodiac sign,
//! category scores, lucky bundle, card draw, horoscope pick.
//!
//! The function is referentially transparent: identical arguments produce
//! deep-equal results. It reads no clock and performs no I/O.

use saju_base::{day_pillar, solar_term_of, stem_element, year_pillar, zodiac_sign};
use saju_time::{CivilDate, Moment, SolarTimeCorrection, TimeError, correct, standard_meridian_deg};

use crate::category::Category;
use crate::config::FortuneConfig;
use crate::content::ContentTables;
use crate::error::FortuneError;
use crate::fortune_types::FortuneResult;
use crate::horoscope::select_horoscope;
use crate::lucky::select_lucky;
use crate::profile::{BirthInstant, BirthProfile};
use crate::scorer::score;
use crate::tarot::select_card;

/// Birth date to use for the day stem, with the correction that produced it.
///
/// Only a located birth clock is corrected; otherwise the civil birth date
/// is used as is.
pub fn corrected_birth_date(
    profile: &BirthProfile,
    config: &FortuneConfig,
) -> Result<(CivilDate, Option<SolarTimeCorrection>), FortuneError> {
    let BirthInstant::Located {
        time,
        longitude_deg,
    } = profile.instant()
    else {
        return Ok((profile.date(), None));
    };
    let meridian = standard_meridian_deg(profile.timezone_id(), &config.default_timezone);
    let correction = correct(time, longitude_deg, meridian)?;
    let date = profile.date();
    let shifted = correction
        .shift_date(date)
        .ok_or(TimeError::InvalidDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        })?;
    tracing::debug!(
        offset_minutes = correction.offset_minutes,
        day_shift = correction.day_shift.days(),
        meridian,
        "birth clock corrected to solar time"
    );
    Ok((shifted, Some(correction)))
}

/// Compute the full fortune for `profile` at `moment`.
pub fn calculate_fortune(
    profile: &BirthProfile,
    moment: &Moment,
    tables: &ContentTables,
    config: &FortuneConfig,
) -> Result<FortuneResult, FortuneError> {
    let today = day_pillar(moment.date);
    let (birth_date, solar_correction) = corrected_birth_date(profile, config)?;
    let user_day_pillar = day_pillar(birth_date);
    let user_stem = user_day_pillar.stem();
    let zodiac = zodiac_sign(profile.date().month(), profile.date().day());
    tracing::debug!(
        today = today.cycle_index(),
        user = user_day_pillar.cycle_index(),
        zodiac = zodiac.code(),
        "pillars resolved"
    );

    let [overall, wealth, health, romance, advice] = [
        Category::Overall,
        Category::Wealth,
        Category::Health,
        Category::Romance,
        Category::Advice,
    ]
    .map(|c| score(user_stem, today, c, moment.date));

    let term = solar_term_of(moment.date);
    let lucky = select_lucky(
        user_stem,
        moment.date,
        today,
        term,
        profile,
        overall.score,
        tables.bundles.as_ref(),
    );
    let card = select_card(
        profile,
        user_stem,
        moment,
        config.reversal_threshold,
        tables.tarot.as_ref(),
    );
    let horoscope = select_horoscope(
        zodiac,
        moment.date.day_of_year(),
        tables.horoscope.as_ref(),
    );

    Ok(FortuneResult {
        reference: *moment,
        day_pillar: today,
        today_element: stem_element(today.stem()),
        solar_term: term,
        birth_date,
        solar_correction,
        user_day_pillar,
        user_day_stem: user_stem,
        user_element: stem_element(user_stem),
        birth_year_pillar: year_pillar(profile.date().year()),
        zodiac_sign: zodiac,
        overall,
        wealth,
        health,
        romance,
        advice,
        lucky,
        card,
        horoscope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{EarthlyBranch, HeavenlyStem, ZodiacSign};
    use saju_time::DayShift;

    fn moment() -> Moment {
        Moment::from_parts(2024, 3, 20, 9, 47).unwrap()
    }

    #[test]
    fn date_only_profile() {
        let p = BirthProfile::from_fields(1990, 5, 15, None, None, None, None).unwrap();
        let r = calculate_fortune(&p, &moment(), &ContentTables::empty(), &FortuneConfig::default())
            .unwrap();
        assert_eq!(r.day_pillar.cycle_index(), 25);
        assert_eq!(r.user_day_pillar.cycle_index(), 22);
        assert_eq!(r.user_day_stem, HeavenlyStem::Byeong);
        assert_eq!(r.zodiac_sign, ZodiacSign::Taurus);
        assert_eq!(r.birth_year_pillar.branch(), EarthlyBranch::O);
        assert!(r.solar_correction.is_none());
        assert_eq!(r.overall.score, 64);
        assert!(!r.lucky.from_table);
        assert!(!r.horoscope.from_table);
    }

    #[test]
    fn late_night_birth_east_of_meridian_moves_forward() {
        // 23:50 KST at 140 E: +20 min -> 00:10 next day.
        let p =
            BirthProfile::from_fields(1990, 5, 15, Some(23), Some(50), Some(140.0), None).unwrap();
        let (date, corr) = corrected_birth_date(&p, &FortuneConfig::default()).unwrap();
        let corr = corr.unwrap();
        assert_eq!(corr.day_shift, DayShift::Next);
        assert_eq!(date, CivilDate::new(1990, 5, 16).unwrap());

        let r = calculate_fortune(&p, &moment(), &ContentTables::empty(), &FortuneConfig::default())
            .unwrap();
        assert_eq!(r.user_day_pillar.cycle_index(), 23);
        assert_eq!(r.birth_date, date);
    }

    #[test]
    fn early_birth_in_seoul_moves_back() {
        // 00:10 at 127 E with KST: -32 min -> 23:38 previous day.
        let p = BirthProfile::from_fields(
            1990,
            5,
            15,
            Some(0),
            Some(10),
            Some(127.0),
            Some("Asia/Seoul".into()),
        )
        .unwrap();
        let (date, corr) = corrected_birth_date(&p, &FortuneConfig::default()).unwrap();
        assert_eq!(corr.unwrap().day_shift, DayShift::Previous);
        assert_eq!(date, CivilDate::new(1990, 5, 14).unwrap());
    }

    #[test]
    fn clock_without_longitude_is_not_corrected() {
        let p = BirthProfile::from_fields(1990, 5, 15, Some(0), Some(10), None, None).unwrap();
        let (date, corr) = corrected_birth_date(&p, &FortuneConfig::default()).unwrap();
        assert!(corr.is_none());
        assert_eq!(date, p.date());
    }

    #[test]
    fn unknown_timezone_uses_configured_default() {
        let p = BirthProfile::from_fields(
            1990,
            5,
            15,
            Some(12),
            Some(0),
            Some(135.0),
            Some("Mars/Olympus".into()),
        )
        .unwrap();
        let (_, corr) = corrected_birth_date(&p, &FortuneConfig::default()).unwrap();
        assert_eq!(corr.unwrap().offset_minutes, 0);
    }

    #[test]
    fn repeatable() {
        let p =
            BirthProfile::from_fields(1985, 11, 3, Some(7), Some(15), Some(126.9), None).unwrap();
        let t = ContentTables::empty();
        let c = FortuneConfig::default();
        let a = calculate_fortune(&p, &moment(), &t, &c).unwrap();
        let b = calculate_fortune(&p, &moment(), &t, &c).unwrap();
        assert_eq!(a, b);
    }
}
