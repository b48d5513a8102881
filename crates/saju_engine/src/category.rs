//! Life-domain categories, their score weights and keyword tiers.
//!
//! Four-level scales use inclusive lower bounds 75 / 50 / 25. The advice
//! scale has three levels at 66 / 33. Keyword labels are the Korean strings
//! phrase banks are keyed by.

use serde::Serialize;

/// Scored categories, in scoring-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Overall,
    Wealth,
    Health,
    Romance,
    Advice,
}

pub const ALL_CATEGORIES: [Category; 5] = [
    Category::Overall,
    Category::Wealth,
    Category::Health,
    Category::Romance,
    Category::Advice,
];

/// Weights applied to the four score terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeights {
    pub element: f64,
    pub month: f64,
    pub term: f64,
    pub daily: f64,
}

const fn weights(element: f64, month: f64, term: f64, daily: f64) -> CategoryWeights {
    CategoryWeights {
        element,
        month,
        term,
        daily,
    }
}

impl Category {
    /// Index mixed into the daily-variation hash (Overall=0 .. Advice=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Phrase-bank category code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Overall => "Main",
            Self::Wealth => "Money",
            Self::Health => "Health",
            Self::Romance => "Love",
            Self::Advice => "Advice",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Wealth => "wealth",
            Self::Health => "health",
            Self::Romance => "romance",
            Self::Advice => "advice",
        }
    }

    /// Text shown when the phrase bank has nothing for this category.
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::Overall => "총운 운세를 불러올 수 없습니다.",
            Self::Wealth => "재물운 운세를 불러올 수 없습니다.",
            Self::Health => "건강운 운세를 불러올 수 없습니다.",
            Self::Romance => "애정운 운세를 불러올 수 없습니다.",
            Self::Advice => "오늘의 조언을 불러올 수 없습니다.",
        }
    }

    pub const fn weights(self) -> CategoryWeights {
        match self {
            Self::Overall => weights(1.0, 0.8, 0.5, 1.0),
            Self::Wealth => weights(0.9, 0.6, 0.4, 1.1),
            Self::Health => weights(1.1, 0.7, 0.6, 0.9),
            Self::Romance => weights(1.0, 0.9, 0.7, 1.0),
            Self::Advice => weights(0.8, 0.5, 0.3, 0.8),
        }
    }

    /// Keyword for a score on this category's scale.
    pub fn keyword(self, score: u8) -> Keyword {
        use Keyword::*;
        match self {
            Self::Overall => four_level(score, [VeryGood, Good, Average, Caution]),
            Self::Wealth => four_level(
                score,
                [WealthRising, WealthSteady, Overspending, FinancialDistress],
            ),
            Self::Health => four_level(score, [HealthGood, Vitality, Fatigue, IllnessCaution]),
            Self::Romance => four_level(
                score,
                [RomanceBest, RelationshipGrowth, Lull, ConflictCaution],
            ),
            Self::Advice => three_level(score, [Emphasize, Prudence, ActNow]),
        }
    }
}

/// Luck-quality keyword, on the four-level scale.
pub fn luck_keyword(score: u8) -> Keyword {
    use Keyword::*;
    four_level(score, [LuckBest, LuckGood, LuckAverage, LuckCaution])
}

fn four_level(score: u8, tiers: [Keyword; 4]) -> Keyword {
    match score {
        75.. => tiers[0],
        50..=74 => tiers[1],
        25..=49 => tiers[2],
        _ => tiers[3],
    }
}

fn three_level(score: u8, tiers: [Keyword; 3]) -> Keyword {
    match score {
        66.. => tiers[0],
        33..=65 => tiers[1],
        _ => tiers[2],
    }
}

/// Discrete reading attached to a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    VeryGood,
    Good,
    Average,
    Caution,
    WealthRising,
    WealthSteady,
    Overspending,
    FinancialDistress,
    HealthGood,
    Vitality,
    Fatigue,
    IllnessCaution,
    RomanceBest,
    RelationshipGrowth,
    Lull,
    ConflictCaution,
    Emphasize,
    Prudence,
    ActNow,
    LuckBest,
    LuckGood,
    LuckAverage,
    LuckCaution,
}

impl Keyword {
    /// Korean label, e.g. "재물상승".
    pub const fn korean(self) -> &'static str {
        match self {
            Self::VeryGood => "매우좋음",
            Self::Good => "좋음",
            Self::Average => "보통",
            Self::Caution => "주의",
            Self::WealthRising => "재물상승",
            Self::WealthSteady => "현상유지",
            Self::Overspending => "지출주의",
            Self::FinancialDistress => "재정악화",
            Self::HealthGood => "건강좋음",
            Self::Vitality => "활력넘침",
            Self::Fatigue => "피로누적",
            Self::IllnessCaution => "질병주의",
            Self::RomanceBest => "애정최고",
            Self::RelationshipGrowth => "관계발전",
            Self::Lull => "소강상태",
            Self::ConflictCaution => "다툼주의",
            Self::Emphasize => "조언강조",
            Self::Prudence => "신중요함",
            Self::ActNow => "실행권유",
            Self::LuckBest => "행운최고",
            Self::LuckGood => "행운좋음",
            Self::LuckAverage => "행운보통",
            Self::LuckCaution => "행운주의",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryGood => "very good",
            Self::Good => "good",
            Self::Average => "average",
            Self::Caution => "caution",
            Self::WealthRising => "rising",
            Self::WealthSteady => "steady",
            Self::Overspending => "overspending",
            Self::FinancialDistress => "distress",
            Self::HealthGood => "healthy",
            Self::Vitality => "vital",
            Self::Fatigue => "fatigue",
            Self::IllnessCaution => "illness caution",
            Self::RomanceBest => "best",
            Self::RelationshipGrowth => "growing",
            Self::Lull => "lull",
            Self::ConflictCaution => "conflict caution",
            Self::Emphasize => "emphasize",
            Self::Prudence => "prudence",
            Self::ActNow => "act now",
            Self::LuckBest => "best",
            Self::LuckGood => "good",
            Self::LuckAverage => "average",
            Self::LuckCaution => "caution",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_level_boundaries_inclusive() {
        let c = Category::Overall;
        assert_eq!(c.keyword(0), Keyword::Caution);
        assert_eq!(c.keyword(24), Keyword::Caution);
        assert_eq!(c.keyword(25), Keyword::Average);
        assert_eq!(c.keyword(49), Keyword::Average);
        assert_eq!(c.keyword(50), Keyword::Good);
        assert_eq!(c.keyword(74), Keyword::Good);
        assert_eq!(c.keyword(75), Keyword::VeryGood);
        assert_eq!(c.keyword(100), Keyword::VeryGood);
    }

    #[test]
    fn wealth_scale() {
        assert_eq!(Category::Wealth.keyword(80).korean(), "재물상승");
        assert_eq!(Category::Wealth.keyword(60).korean(), "현상유지");
        assert_eq!(Category::Wealth.keyword(30).korean(), "지출주의");
        assert_eq!(Category::Wealth.keyword(10).korean(), "재정악화");
    }

    #[test]
    fn advice_three_levels() {
        let c = Category::Advice;
        assert_eq!(c.keyword(100), Keyword::Emphasize);
        assert_eq!(c.keyword(66), Keyword::Emphasize);
        assert_eq!(c.keyword(65), Keyword::Prudence);
        assert_eq!(c.keyword(33), Keyword::Prudence);
        assert_eq!(c.keyword(32), Keyword::ActNow);
        assert_eq!(c.keyword(0), Keyword::ActNow);
    }

    #[test]
    fn luck_scale() {
        assert_eq!(luck_keyword(75), Keyword::LuckBest);
        assert_eq!(luck_keyword(50), Keyword::LuckGood);
        assert_eq!(luck_keyword(25), Keyword::LuckAverage);
        assert_eq!(luck_keyword(24), Keyword::LuckCaution);
    }

    #[test]
    fn indices_and_codes() {
        for (i, c) in ALL_CATEGORIES.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
        assert_eq!(Category::Romance.code(), "Love");
    }

    #[test]
    fn weights_table() {
        let w = Category::Health.weights();
        assert_eq!((w.element, w.month, w.term, w.daily), (1.1, 0.7, 0.6, 0.9));
    }
}
