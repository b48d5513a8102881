//! Property tests for score bounds, determinism and the reversal rate.

use proptest::prelude::*;
use saju_base::{HeavenlyStem, day_pillar};
use saju_engine::{
    ALL_CATEGORIES, BirthProfile, ContentTables, FortuneConfig, calculate_fortune, reversed_hash,
    score,
};
use saju_time::{CivilDate, Moment};

fn date_from_offset(offset: i64) -> CivilDate {
    CivilDate::new(2000, 1, 1).unwrap().add_days(offset).unwrap()
}

proptest! {
    #[test]
    fn score_is_bounded(
        stem in 0u8..10,
        today_offset in -40_000i64..40_000,
        category in 0usize..5,
    ) {
        let date = date_from_offset(today_offset);
        let r = score(
            HeavenlyStem::from_index(stem),
            day_pillar(date),
            ALL_CATEGORIES[category],
            date,
        );
        prop_assert!(r.score <= 100);
        prop_assert_eq!(r.keyword, r.category.keyword(r.score));
    }

    #[test]
    fn fortune_is_deterministic(
        birth_offset in -20_000i64..9_000,
        hour in proptest::option::of(0u32..24),
        minute in 0u32..60,
        longitude in proptest::option::of(-180.0f64..=180.0),
        ref_offset in 0i64..10_000,
        ref_hour in 0u32..24,
        ref_minute in 0u32..60,
    ) {
        let birth = date_from_offset(birth_offset);
        let profile = BirthProfile::from_fields(
            birth.year(),
            birth.month(),
            birth.day(),
            hour,
            Some(minute),
            longitude,
            None,
        )
        .unwrap();
        let reference = date_from_offset(ref_offset);
        let moment = Moment::from_parts(
            reference.year(),
            reference.month(),
            reference.day(),
            ref_hour,
            ref_minute,
        )
        .unwrap();
        let tables = ContentTables::empty();
        let config = FortuneConfig::default();
        let a = calculate_fortune(&profile, &moment, &tables, &config).unwrap();
        let b = calculate_fortune(&profile, &moment, &tables, &config).unwrap();
        for c in a.categories() {
            prop_assert!(c.score <= 100);
        }
        prop_assert!(a.card.card.index() < 78);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn reversal_rate_near_forty_percent() {
    let mut total = 0u32;
    let mut reversed = 0u32;
    for year in [1970, 1985, 1999] {
        for month in 1..=12u32 {
            for day in (1..=28u32).step_by(3) {
                let profile =
                    BirthProfile::from_fields(year, month, day, None, None, None, None).unwrap();
                let ref_day = (month * 7 + day) % 28 + 1;
                for hour in (0..24u32).step_by(5) {
                    for minute in (0..60u32).step_by(7) {
                        let moment =
                            Moment::from_parts(2024, month, ref_day, hour, minute).unwrap();
                        total += 1;
                        if reversed_hash(&profile, &moment) < 40 {
                            reversed += 1;
                        }
                    }
                }
            }
        }
    }
    let rate = reversed as f64 / total as f64;
    assert!((0.35..=0.45).contains(&rate), "reversal rate {rate}");
}
