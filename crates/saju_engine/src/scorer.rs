//! Category scorer.
//!
//! `score = clamp(floor(50 + w.element*E + w.month*M + w.term*T + w.daily*D), 0, 100)`
//! where
//! - `E = 0.6*is(user, stem) + 0.4*is(user, branch)` in [-20, 20]
//! - `M = 0.5*is(user, month)` in [-10, 10]
//! - `T` is the solar-term energy in [0, 43]
//! - `D` is the daily variation hash in [-20, 20]
//!
//! and `is(user, x)` is the element interaction score of the user's day stem
//! against the element of `x`.

use saju_base::{
    HeavenlyStem, Pillar, branch_element, interaction_score, month_element, solar_term_of,
    stem_element,
};
use saju_time::CivilDate;
use serde::Serialize;

use crate::category::{Category, Keyword};

/// Score given before any term is added.
pub const BASE_SCORE: f64 = 50.0;

/// The four unweighted terms of a category score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreTerms {
    pub element: f64,
    pub month: f64,
    pub term_energy: f64,
    pub daily_variation: i32,
}

/// Score and keyword for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryResult {
    pub category: Category,
    /// Integer score in 0..=100.
    pub score: u8,
    pub keyword: Keyword,
}

/// Daily variation in [-20, 20].
///
/// `h = dateSeed*31 + stem*17 + cycle*13 + category*7 + energy*3`, then
/// `h ^= energy`, reduced by `h mod 41 - 20`.
pub fn daily_variation(
    date: CivilDate,
    user_stem: HeavenlyStem,
    today: Pillar,
    category: Category,
    term_energy: u8,
) -> i32 {
    let energy = term_energy as i64;
    let mut h = date.as_ymd_number() * 31
        + user_stem.index() as i64 * 17
        + today.cycle_index() as i64 * 13
        + category.index() as i64 * 7
        + energy * 3;
    h ^= energy;
    (h.rem_euclid(41) - 20) as i32
}

/// The unweighted terms for one category on `date`.
pub fn score_terms(
    user_stem: HeavenlyStem,
    today: Pillar,
    category: Category,
    date: CivilDate,
) -> ScoreTerms {
    let user = stem_element(user_stem);
    let element = 0.6 * interaction_score(user, stem_element(today.stem())) as f64
        + 0.4 * interaction_score(user, branch_element(today.branch())) as f64;
    let month = 0.5 * interaction_score(user, month_element(date.month())) as f64;
    let energy = solar_term_of(date).energy();
    ScoreTerms {
        element,
        month,
        term_energy: energy as f64,
        daily_variation: daily_variation(date, user_stem, today, category, energy),
    }
}

/// Weighted sum of `terms`, floored and clamped to 0..=100.
pub fn combine(category: Category, terms: &ScoreTerms) -> u8 {
    let w = category.weights();
    let raw = BASE_SCORE
        + w.element * terms.element
        + w.month * terms.month
        + w.term * terms.term_energy
        + w.daily * terms.daily_variation as f64;
    raw.floor().clamp(0.0, 100.0) as u8
}

/// Score one category for a user day stem against today's pillar.
pub fn score(
    user_stem: HeavenlyStem,
    today: Pillar,
    category: Category,
    date: CivilDate,
) -> CategoryResult {
    let terms = score_terms(user_stem, today, category, date);
    let score = combine(category, &terms);
    tracing::debug!(
        category = category.name(),
        element = terms.element,
        month = terms.month,
        term_energy = terms.term_energy,
        daily = terms.daily_variation,
        score,
        "category scored"
    );
    CategoryResult {
        category,
        score,
        keyword: category.keyword(score),
    }
}
