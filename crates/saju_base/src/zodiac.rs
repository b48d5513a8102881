//! Western zodiac sign from a birth month/day.
//!
//! Twelve fixed, inclusive date ranges. Sagittarius/Capricorn and
//! Capricorn/Aquarius straddle the year end; Capricorn runs 12/25 to 1/19.
//! Dates no range claims fall back to Pisces.

use serde::Serialize;

/// The 12 western zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in table order (0 = Aries, 11 = Pisces).
pub const ALL_ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// `(start_month, start_day, end_month, end_day)`, inclusive on both ends.
const SIGN_RANGES: [(u32, u32, u32, u32); 12] = [
    (3, 21, 4, 19),
    (4, 20, 5, 20),
    (5, 21, 6, 21),
    (6, 22, 7, 22),
    (7, 23, 8, 22),
    (8, 23, 9, 23),
    (9, 24, 10, 22),
    (10, 23, 11, 22),
    (11, 23, 12, 24),
    (12, 25, 1, 19),
    (1, 20, 2, 18),
    (2, 19, 3, 20),
];

impl ZodiacSign {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Two-letter code used to key horoscope tables.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Aries => "AR",
            Self::Taurus => "TA",
            Self::Gemini => "GE",
            Self::Cancer => "CA",
            Self::Leo => "LE",
            Self::Virgo => "VI",
            Self::Libra => "LI",
            Self::Scorpio => "SC",
            Self::Sagittarius => "SA",
            Self::Capricorn => "CP",
            Self::Aquarius => "AQ",
            Self::Pisces => "PI",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Korean name, e.g. "양자리".
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Aries => "양자리",
            Self::Taurus => "황소자리",
            Self::Gemini => "쌍둥이자리",
            Self::Cancer => "게자리",
            Self::Leo => "사자자리",
            Self::Virgo => "처녀자리",
            Self::Libra => "천칭자리",
            Self::Scorpio => "전갈자리",
            Self::Sagittarius => "사수자리",
            Self::Capricorn => "염소자리",
            Self::Aquarius => "물병자리",
            Self::Pisces => "물고기자리",
        }
    }

    /// Sign for a two-letter code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_ZODIAC_SIGNS
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code))
    }

    /// Inclusive `(start_month, start_day, end_month, end_day)` range.
    pub const fn range(self) -> (u32, u32, u32, u32) {
        SIGN_RANGES[self as usize]
    }

    fn contains(self, month: u32, day: u32) -> bool {
        let (sm, sd, em, ed) = self.range();
        if sm == em {
            month == sm && (sd..=ed).contains(&day)
        } else {
            (month == sm && day >= sd) || (month == em && day <= ed)
        }
    }
}

/// Zodiac sign of a birth month/day; Pisces when no range matches.
pub fn zodiac_sign(month: u32, day: u32) -> ZodiacSign {
    ALL_ZODIAC_SIGNS
        .iter()
        .copied()
        .find(|s| s.contains(month, day))
        .unwrap_or(ZodiacSign::Pisces)
}
