//! The 24 solar terms (jeolgi) on fixed civil dates.
//!
//! Each term starts on the same month/day every year. This is a simplified
//! yearly table, not an astronomical computation: real solar terms drift by
//! a day or so between years. The term in effect on a date is the last entry
//! whose start is not after that date; January 1-5 precede every entry and
//! take the first one (Sohan).

use saju_time::CivilDate;
use serde::Serialize;

use Season::{Autumn, Spring, Summer, Winter};

/// Season tag attached to each solar term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
}

/// All 24 terms in table order (index 0 = Sohan, starting January 6).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

/// Static row of the term table.
struct TermRow {
    korean: &'static str,
    english: &'static str,
    month: u32,
    day: u32,
    season: Season,
    energy: u8,
}

const fn row(
    korean: &'static str,
    english: &'static str,
    month: u32,
    day: u32,
    season: Season,
    energy: u8,
) -> TermRow {
    TermRow {
        korean,
        english,
        month,
        day,
        season,
        energy,
    }
}

static TERM_TABLE: [TermRow; 24] = [
    row("소한", "Minor Cold", 1, 6, Winter, 2),
    row("대한", "Major Cold", 1, 20, Winter, 1),
    row("입춘", "Start of Spring", 2, 4, Spring, 10),
    row("우수", "Rain Water", 2, 19, Spring, 11),
    row("경칩", "Awakening of Insects", 3, 6, Spring, 12),
    row("춘분", "Spring Equinox", 3, 21, Spring, 13),
    row("청명", "Pure Brightness", 4, 5, Spring, 14),
    row("곡우", "Grain Rain", 4, 20, Spring, 15),
    row("입하", "Start of Summer", 5, 6, Summer, 20),
    row("소만", "Grain Buds", 5, 21, Summer, 21),
    row("망종", "Grain in Ear", 6, 6, Summer, 22),
    row("하지", "Summer Solstice", 6, 21, Summer, 23),
    row("소서", "Minor Heat", 7, 7, Summer, 24),
    row("대서", "Major Heat", 7, 23, Summer, 25),
    row("입추", "Start of Autumn", 8, 8, Autumn, 30),
    row("처서", "End of Heat", 8, 23, Autumn, 31),
    row("백로", "White Dew", 9, 8, Autumn, 32),
    row("추분", "Autumn Equinox", 9, 23, Autumn, 33),
    row("한로", "Cold Dew", 10, 8, Autumn, 34),
    row("상강", "Frost's Descent", 10, 23, Autumn, 35),
    row("입동", "Start of Winter", 11, 8, Winter, 40),
    row("소설", "Minor Snow", 11, 22, Winter, 41),
    row("대설", "Major Snow", 12, 7, Winter, 42),
    row("동지", "Winter Solstice", 12, 22, Winter, 43),
];

impl SolarTerm {
    /// 0-based table index (Sohan=0 .. Dongji=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    fn row(self) -> &'static TermRow {
        &TERM_TABLE[self as usize]
    }

    /// Korean name, e.g. "입춘".
    pub fn korean(self) -> &'static str {
        self.row().korean
    }

    pub fn english(self) -> &'static str {
        self.row().english
    }

    /// Fixed (month, day) on which the term starts.
    pub fn start(self) -> (u32, u32) {
        let r = self.row();
        (r.month, r.day)
    }

    pub fn season(self) -> Season {
        self.row().season
    }

    /// Opaque energy magnitude in 0..=43.
    pub fn energy(self) -> u8 {
        self.row().energy
    }
}

/// Term in effect on a month/day.
///
/// Months outside 1-12 are a caller defect; they compare lexicographically
/// and still resolve to some table entry.
pub fn solar_term_for(month: u32, day: u32) -> SolarTerm {
    ALL_SOLAR_TERMS
        .iter()
        .rev()
        .find(|t| t.start() <= (month, day))
        .copied()
        .unwrap_or(ALL_SOLAR_TERMS[0])
}

/// Term in effect on a civil date (year is ignored).
pub fn solar_term_of(date: CivilDate) -> SolarTerm {
    solar_term_for(date.month(), date.day())
}
