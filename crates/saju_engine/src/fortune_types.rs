//! Result types of a fortune computation.

use saju_base::{Element, HeavenlyStem, Pillar, SolarTerm, ZodiacSign};
use saju_time::{CivilDate, Moment, SolarTimeCorrection};
use serde::Serialize;

use crate::horoscope::HoroscopePick;
use crate::lucky::LuckyBundle;
use crate::scorer::CategoryResult;
use crate::tarot::CardDraw;

/// Everything computed for one `(profile, reference moment)` pair.
///
/// Built once by [`crate::calculate_fortune`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FortuneResult {
    /// Reference moment the result is for.
    pub reference: Moment,
    /// Pillar of the reference date.
    pub day_pillar: Pillar,
    pub today_element: Element,
    pub solar_term: SolarTerm,

    /// Birth date after any solar-time day rollover.
    pub birth_date: CivilDate,
    /// Present only when clock time and longitude were both known.
    pub solar_correction: Option<SolarTimeCorrection>,
    pub user_day_pillar: Pillar,
    pub user_day_stem: HeavenlyStem,
    pub user_element: Element,
    pub birth_year_pillar: Pillar,
    pub zodiac_sign: ZodiacSign,

    pub overall: CategoryResult,
    pub wealth: CategoryResult,
    pub health: CategoryResult,
    pub romance: CategoryResult,
    pub advice: CategoryResult,

    pub lucky: LuckyBundle,
    pub card: CardDraw,
    pub horoscope: HoroscopePick,
}

impl FortuneResult {
    /// Category results in scoring order.
    pub fn categories(&self) -> [&CategoryResult; 5] {
        [
            &self.overall,
            &self.wealth,
            &self.health,
            &self.romance,
            &self.advice,
        ]
    }
}
