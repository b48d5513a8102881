//! Calendar and elemental lookup tables for daily saju scoring.
//!
//! This crate provides:
//! - The sexagenary cycle: stems, branches, day and year pillars
//! - Five-element classification and the interaction score matrix
//! - The 24 fixed-date solar terms with season and energy
//! - Western zodiac sign ranges
//! - A seeded LCG and Fisher-Yates shuffle
//!
//! Everything is a pure function of its arguments over read-only tables.

pub mod element;
pub mod sexagenary;
pub mod shuffle;
pub mod solar_term;
pub mod util;
pub mod zodiac;

pub use element::{
    ALL_ELEMENTS, Element, ElementRelation, branch_element, interaction_score, month_element,
    relation, stem_element,
};
pub use sexagenary::{
    ALL_BRANCHES, ALL_STEMS, CYCLE_LEN, DAY_EPOCH_DAYS_FROM_CE, DAY_EPOCH_INDEX, EarthlyBranch,
    HeavenlyStem, Pillar, YEAR_EPOCH, day_pillar, year_pillar,
};
pub use shuffle::{Lcg, shuffle, shuffle_in_place};
pub use solar_term::{ALL_SOLAR_TERMS, Season, SolarTerm, solar_term_for, solar_term_of};
pub use util::{frac, normalize_360};
pub use zodiac::{ALL_ZODIAC_SIGNS, ZodiacSign, zodiac_sign};
