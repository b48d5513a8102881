//! Sexagenary (60-term) cycle: heavenly stems, earthly branches and pillars.
//!
//! The cycle pairs 10 stems with 12 branches; position `i` (0..60) has stem
//! `i mod 10` and branch `i mod 12`. Days advance one position per civil day
//! from a fixed anchor; years advance one position per civil year.
//!
//! Day epoch: 1900-01-01 = Gyeong-Jin (index 16).
//! Year epoch: CE 1984 = Gap-Ja (index 0).

use saju_time::CivilDate;
use serde::Serialize;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = Gap).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

const STEM_KOREAN: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index mod 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Korean reading, e.g. "갑".
    pub fn korean(self) -> &'static str {
        STEM_KOREAN[self.index() as usize]
    }

    /// Hanja character, e.g. "甲".
    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index() as usize]
    }

    /// Yang stems occupy even positions.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = Ja).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

const BRANCH_KOREAN: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

impl EarthlyBranch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Korean reading, e.g. "자".
    pub fn korean(self) -> &'static str {
        BRANCH_KOREAN[self.index() as usize]
    }

    /// Hanja character, e.g. "子".
    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Zodiac animal of the 12-animal cycle.
    pub fn animal(self) -> &'static str {
        BRANCH_ANIMALS[self.index() as usize]
    }
}

/// A position in the sexagenary cycle.
///
/// Only produced by [`day_pillar`] and [`year_pillar`], so the stem and
/// branch always agree with the cycle index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    cycle_index: u8,
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl Pillar {
    fn from_cycle_index(cycle_index: u8) -> Self {
        let cycle_index = cycle_index % CYCLE_LEN;
        Self {
            cycle_index,
            stem: HeavenlyStem::from_index(cycle_index % 10),
            branch: EarthlyBranch::from_index(cycle_index % 12),
        }
    }

    /// 0-based position in the 60-cycle.
    pub const fn cycle_index(self) -> u8 {
        self.cycle_index
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Korean two-syllable name, e.g. "경진".
    pub fn korean(self) -> String {
        format!("{}{}", self.stem.korean(), self.branch.korean())
    }

    /// Hanja name, e.g. "庚辰".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// Anchor date for day pillars, as days from CE (1900-01-01).
pub const DAY_EPOCH_DAYS_FROM_CE: i64 = 693_596;

/// Cycle index of the day epoch (Gyeong-Jin).
pub const DAY_EPOCH_INDEX: u8 = 16;

/// Year whose pillar is Gap-Ja (index 0).
pub const YEAR_EPOCH: i32 = 1984;

/// Day pillar of a civil date.
///
/// `cycle_index = (16 + days since 1900-01-01) mod 60`, normalized so dates
/// before the anchor work too. Time of day plays no part.
pub fn day_pillar(date: CivilDate) -> Pillar {
    let days = date.days_from_ce() - DAY_EPOCH_DAYS_FROM_CE;
    let offset = (DAY_EPOCH_INDEX as i64 + days).rem_euclid(CYCLE_LEN as i64);
    Pillar::from_cycle_index(offset as u8)
}

/// Year pillar of a CE year (civil year, no solar-term boundary).
pub fn year_pillar(ce_year: i32) -> Pillar {
    let offset = (ce_year as i64 - YEAR_EPOCH as i64).rem_euclid(CYCLE_LEN as i64);
    Pillar::from_cycle_index(offset as u8)
}
