//! Five-element (ohaeng) classification and interaction scoring.
//!
//! Provides the element of each stem and branch, the seasonal element of each
//! civil month, the generating and overcoming cycles, and the asymmetric
//! interaction score between a subject element and an influencing element.
//!
//! Generating cycle: Wood -> Fire -> Earth -> Metal -> Water -> Wood.
//! Overcoming cycle: Wood -> Earth -> Water -> Fire -> Metal -> Wood.

use serde::{Deserialize, Serialize};

use crate::sexagenary::{EarthlyBranch, HeavenlyStem};

/// The five elements.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (index 0 = Wood).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element at `index mod 5`.
    pub const fn from_index(index: u8) -> Self {
        ALL_ELEMENTS[(index % 5) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Korean name, e.g. "목".
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// The element this one generates (feeds).
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (controls).
    pub const fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

/// How a subject element relates to another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element.
    Parity,
    /// Subject generates the other (subject is spent).
    Generates,
    /// Other generates the subject (subject is nourished).
    GeneratedBy,
    /// Subject overcomes the other.
    Overcomes,
    /// Other overcomes the subject.
    OvercomeBy,
    /// No cycle connects the two.
    Neutral,
}

impl ElementRelation {
    /// Score contribution of this relation.
    pub const fn score(self) -> i32 {
        match self {
            Self::Parity => 10,
            Self::Generates => 15,
            Self::GeneratedBy => 20,
            Self::Overcomes => 5,
            Self::OvercomeBy => -15,
            Self::Neutral => 0,
        }
    }
}

/// Relation of `subject` to `other`.
pub fn relation(subject: Element, other: Element) -> ElementRelation {
    if subject == other {
        ElementRelation::Parity
    } else if subject.generates() == other {
        ElementRelation::Generates
    } else if other.generates() == subject {
        ElementRelation::GeneratedBy
    } else if subject.overcomes() == other {
        ElementRelation::Overcomes
    } else if other.overcomes() == subject {
        ElementRelation::OvercomeBy
    } else {
        ElementRelation::Neutral
    }
}

/// Interaction score of `subject` under the influence of `other`.
///
/// Parity +10, generates +15, generated-by +20, overcomes +5,
/// overcome-by -15, otherwise 0. Deliberately asymmetric.
pub fn interaction_score(subject: Element, other: Element) -> i32 {
    relation(subject, other).score()
}

/// Element of a heavenly stem (pairs: Wood, Fire, Earth, Metal, Water).
pub const fn stem_element(stem: HeavenlyStem) -> Element {
    Element::from_index(stem.index() / 2)
}

/// Element of an earthly branch.
pub const fn branch_element(branch: EarthlyBranch) -> Element {
    use EarthlyBranch::*;
    match branch {
        In | Myo => Element::Wood,
        Sa | O => Element::Fire,
        Sin | Yu => Element::Metal,
        Hae | Ja => Element::Water,
        Jin | Sul | Chuk | Mi => Element::Earth,
    }
}

/// Seasonal element of each civil month, January first.
const MONTH_ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Wood,
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Fire,
    Element::Metal,
    Element::Metal,
    Element::Metal,
    Element::Water,
    Element::Water,
];

/// Seasonal element of a civil month (1-12).
///
/// Months are validated upstream; an out-of-range month is a defect and
/// trips a debug assertion, falling back to the month taken mod 12.
pub fn month_element(month: u32) -> Element {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    MONTH_ELEMENTS[(month.wrapping_sub(1) % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
            assert_eq!(Element::from_index(i as u8), *e);
        }
    }

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn overcoming_is_generation_skipped_once() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.overcomes(), e.generates().generates());
        }
    }

    #[test]
    fn wood_fire_asymmetry() {
        assert_eq!(interaction_score(Element::Wood, Element::Fire), 15);
        assert_eq!(interaction_score(Element::Fire, Element::Wood), 20);
    }

    #[test]
    fn water_fire_overcoming() {
        // Water overcomes Fire.
        assert_eq!(interaction_score(Element::Fire, Element::Water), -15);
        assert_eq!(interaction_score(Element::Water, Element::Fire), 5);
    }

    #[test]
    fn parity() {
        for e in ALL_ELEMENTS {
            assert_eq!(interaction_score(e, e), 10);
        }
    }

    #[test]
    fn every_pair_has_a_cycle_relation() {
        // With five elements, each distinct pair is joined by exactly one cycle.
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                assert_ne!(relation(a, b), ElementRelation::Neutral, "{a:?}/{b:?}");
            }
        }
    }

    #[test]
    fn score_range() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let s = interaction_score(a, b);
                assert!((-15..=20).contains(&s));
            }
        }
    }

    #[test]
    fn stem_elements() {
        let expected = [
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Fire,
            Element::Earth,
            Element::Earth,
            Element::Metal,
            Element::Metal,
            Element::Water,
            Element::Water,
        ];
        for (stem, want) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(stem_element(*stem), want);
        }
    }

    #[test]
    fn branch_elements_count() {
        let earth = ALL_BRANCHES
            .iter()
            .filter(|b| branch_element(**b) == Element::Earth)
            .count();
        assert_eq!(earth, 4);
        assert_eq!(branch_element(EarthlyBranch::Ja), Element::Water);
        assert_eq!(branch_element(EarthlyBranch::O), Element::Fire);
        assert_eq!(branch_element(EarthlyBranch::Yu), Element::Metal);
        assert_eq!(branch_element(EarthlyBranch::Myo), Element::Wood);
    }

    #[test]
    fn month_elements() {
        assert_eq!(month_element(1), Element::Water);
        assert_eq!(month_element(2), Element::Wood);
        assert_eq!(month_element(5), Element::Fire);
        assert_eq!(month_element(8), Element::Metal);
        assert_eq!(month_element(12), Element::Water);
    }
}
