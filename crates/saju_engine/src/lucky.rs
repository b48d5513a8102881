//! Lucky-elements selector.
//!
//! The theme element is `(user + today + termIndex mod 5) mod 5` over element
//! indices. A seed made from the character codes of the reference date,
//! birth data, today's cycle index and the term index drives a sine-based
//! sampler that draws from the theme's candidate lists without replacement.

use saju_base::{Element, HeavenlyStem, Pillar, SolarTerm, frac, stem_element};
use saju_time::CivilDate;
use serde::Serialize;

use crate::category::{Keyword, luck_keyword};
use crate::content::{ElementBundle, ElementBundleTable};
use crate::profile::BirthProfile;

/// Items drawn per list.
pub const ITEM_PICKS: usize = 2;
pub const CONCEPT_PICKS: usize = 2;
pub const NUMBER_PICKS: usize = 2;

const DEFAULT_INTRO: &str = "행운이 함께합니다!";
const DEFAULT_COLOR: &str = "흰색";
const DEFAULT_NUMBERS: [u32; 2] = [3, 7];
const DEFAULT_ITEMS: [&str; 2] = ["손수건", "물 한 잔"];
const DEFAULT_CONCEPTS: [&str; 2] = ["균형", "평온"];

/// Compass direction tied to each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    East,
    South,
    Center,
    West,
    North,
}

impl Direction {
    pub const fn of(element: Element) -> Self {
        match element {
            Element::Wood => Self::East,
            Element::Fire => Self::South,
            Element::Earth => Self::Center,
            Element::Metal => Self::West,
            Element::Water => Self::North,
        }
    }

    pub const fn korean(self) -> &'static str {
        match self {
            Self::East => "동쪽",
            Self::South => "남쪽",
            Self::Center => "중앙",
            Self::West => "서쪽",
            Self::North => "북쪽",
        }
    }
}

/// The selected lucky-elements bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyBundle {
    pub element: Element,
    pub direction: Direction,
    /// Luck quality from the overall score.
    pub keyword: Keyword,
    pub intro: String,
    pub color: String,
    pub numbers: Vec<u32>,
    pub items: Vec<String>,
    pub concepts: Vec<String>,
    /// False when the fixed default bundle was used.
    pub from_table: bool,
}

/// Theme element for the day.
pub fn theme_element(user: Element, today: Element, term: SolarTerm) -> Element {
    let idx = (user.index() as u32 + today.index() as u32 + term.index() as u32 % 5) % 5;
    Element::from_index(idx as u8)
}

/// Sum of the character codes of the seed text.
pub fn lucky_seed(
    reference: CivilDate,
    profile: &BirthProfile,
    today: Pillar,
    term: SolarTerm,
) -> u64 {
    let time = profile
        .instant()
        .clock()
        .map(|t| t.to_string())
        .unwrap_or_default();
    let text = format!(
        "{reference}{}{time}{}{}",
        profile.date(),
        today.cycle_index(),
        term.index()
    );
    text.chars().map(|c| c as u64).sum()
}

/// `frac(|sin(seed + k)| * 10000)`.
pub fn unit(seed: u64, k: u32) -> f64 {
    frac(((seed as f64) + k as f64).sin().abs() * 10_000.0)
}

/// Sine sampler; `k` advances once per draw across all lists.
#[derive(Debug)]
struct Sampler {
    seed: u64,
    k: u32,
}

impl Sampler {
    fn new(seed: u64) -> Self {
        Self { seed, k: 0 }
    }

    /// Up to `n` distinct elements of `list`.
    fn take<T: Clone>(&mut self, list: &[T], n: usize) -> Vec<T> {
        let mut remaining: Vec<&T> = list.iter().collect();
        let mut out = Vec::with_capacity(n.min(list.len()));
        while out.len() < n && !remaining.is_empty() {
            let u = unit(self.seed, self.k);
            self.k += 1;
            let idx = ((u * remaining.len() as f64).floor() as usize).min(remaining.len() - 1);
            out.push(remaining.remove(idx).clone());
        }
        out
    }
}

fn default_bundle(element: Element, keyword: Keyword) -> LuckyBundle {
    LuckyBundle {
        element,
        direction: Direction::of(element),
        keyword,
        intro: DEFAULT_INTRO.to_string(),
        color: DEFAULT_COLOR.to_string(),
        numbers: DEFAULT_NUMBERS.to_vec(),
        items: DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect(),
        concepts: DEFAULT_CONCEPTS.iter().map(|s| s.to_string()).collect(),
        from_table: false,
    }
}

fn sample_bundle(
    element: Element,
    keyword: Keyword,
    bundle: &ElementBundle,
    seed: u64,
) -> LuckyBundle {
    let mut sampler = Sampler::new(seed);
    let color = sampler
        .take(&bundle.colors, 1)
        .pop()
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());
    let items = sampler.take(&bundle.items, ITEM_PICKS);
    let concepts = sampler.take(&bundle.concepts, CONCEPT_PICKS);
    let mut numbers = sampler.take(&bundle.numbers, NUMBER_PICKS);
    if numbers.is_empty() {
        numbers = DEFAULT_NUMBERS.to_vec();
    }
    let intro = if bundle.intro.is_empty() {
        DEFAULT_INTRO.to_string()
    } else {
        bundle.intro.clone()
    };
    LuckyBundle {
        element,
        direction: Direction::of(element),
        keyword,
        intro,
        color,
        numbers,
        items,
        concepts,
        from_table: true,
    }
}

/// Choose the lucky bundle. Never fails; a missing table yields the default.
pub fn select_lucky(
    user_stem: HeavenlyStem,
    reference: CivilDate,
    today: Pillar,
    term: SolarTerm,
    profile: &BirthProfile,
    overall_score: u8,
    table: Option<&ElementBundleTable>,
) -> LuckyBundle {
    let element = theme_element(
        stem_element(user_stem),
        stem_element(today.stem()),
        term,
    );
    let keyword = luck_keyword(overall_score);
    let Some(bundle) = table.and_then(|t| t.get(element)) else {
        tracing::warn!(element = element.name(), "no lucky bundle; using default");
        return default_bundle(element, keyword);
    };
    let seed = lucky_seed(reference, profile, today, term);
    tracing::debug!(element = element.name(), seed, "lucky bundle sampled");
    sample_bundle(element, keyword, bundle, seed)
}
