//! Content tables consumed by the selectors.
//!
//! Tables are loaded by the caller and passed in as plain values. Every table
//! is optional; a missing or empty table makes the matching selector fall
//! back to a fixed default instead of failing.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;
use saju_base::{Element, ZodiacSign};
use serde::{Deserialize, Serialize};

use crate::category::{Category, Keyword};
use crate::error::FortuneError;

/// Number of tarot entries: 78 upright plus 78 reversed identities.
pub const TAROT_TABLE_LEN: usize = 156;

/// Phrase dictionary keyed by category code then Korean keyword label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseBank {
    phrases: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl PhraseBank {
    pub fn new(phrases: BTreeMap<String, BTreeMap<String, Vec<String>>>) -> Self {
        Self { phrases }
    }

    /// All phrases filed under `(category, keyword)`.
    pub fn phrases(&self, category: Category, keyword: Keyword) -> &[String] {
        self.phrases
            .get(category.code())
            .and_then(|by_kw| by_kw.get(keyword.korean()))
            .map_or(&[], Vec::as_slice)
    }

    /// Uniformly random phrase for `(category, keyword)`.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        category: Category,
        keyword: Keyword,
        rng: &mut R,
    ) -> Option<&str> {
        self.phrases(category, keyword)
            .choose(rng)
            .map(String::as_str)
    }

    /// Like [`pick`](Self::pick), but falls back to the category's default text.
    pub fn pick_or_default<R: Rng + ?Sized>(
        &self,
        category: Category,
        keyword: Keyword,
        rng: &mut R,
    ) -> &str {
        self.pick(category, keyword, rng).unwrap_or_else(|| {
            tracing::warn!(
                category = category.code(),
                keyword = keyword.korean(),
                "no phrases for keyword; using default text"
            );
            category.default_text()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.values().all(|m| m.values().all(Vec::is_empty))
    }
}

/// One row of the tarot table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotEntry {
    /// `T001`..`T156`; odd numbers upright, even numbers reversed.
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub image: String,
}

/// Tarot display table indexed by card id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TarotEntry>", into = "Vec<TarotEntry>")]
pub struct TarotTable {
    entries: Vec<TarotEntry>,
}

impl TarotTable {
    /// Table from rows. Duplicate ids are rejected.
    pub fn new(entries: Vec<TarotEntry>) -> Result<Self, FortuneError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert(e.id.as_str()) {
                return Err(FortuneError::malformed(
                    "tarot",
                    format!("duplicate id {}", e.id),
                ));
            }
        }
        if entries.len() != TAROT_TABLE_LEN {
            tracing::warn!(
                rows = entries.len(),
                expected = TAROT_TABLE_LEN,
                "tarot table is incomplete"
            );
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&TarotEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<TarotEntry>> for TarotTable {
    type Error = FortuneError;

    fn try_from(entries: Vec<TarotEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<TarotTable> for Vec<TarotEntry> {
    fn from(t: TarotTable) -> Self {
        t.entries
    }
}

/// One horoscope phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoroscopeEntry {
    /// Two-letter sign code, e.g. "AR".
    pub sign: String,
    #[serde(default)]
    pub keyword: String,
    pub content: String,
}

/// Horoscope phrases for all signs, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoroscopeTable {
    entries: Vec<HoroscopeEntry>,
}

impl HoroscopeTable {
    pub fn new(entries: Vec<HoroscopeEntry>) -> Self {
        Self { entries }
    }

    /// Entries tagged for `sign`, preserving table order.
    pub fn for_sign(&self, sign: ZodiacSign) -> Vec<&HoroscopeEntry> {
        self.entries
            .iter()
            .filter(|e| e.sign.eq_ignore_ascii_case(sign.code()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Candidate lists for one elemental theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementBundle {
    pub intro: String,
    pub numbers: Vec<u32>,
    pub colors: Vec<String>,
    pub items: Vec<String>,
    pub concepts: Vec<String>,
}

/// The five elemental bundles keyed by element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementBundleTable {
    bundles: BTreeMap<Element, ElementBundle>,
}

impl ElementBundleTable {
    pub fn new(bundles: BTreeMap<Element, ElementBundle>) -> Self {
        Self { bundles }
    }

    pub fn get(&self, element: Element) -> Option<&ElementBundle> {
        self.bundles.get(&element)
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// All content tables, each optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTables {
    pub phrases: Option<PhraseBank>,
    pub tarot: Option<TarotTable>,
    pub horoscope: Option<HoroscopeTable>,
    pub bundles: Option<ElementBundleTable>,
}

impl ContentTables {
    /// No tables at all; every selector uses its defaults.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tarot(id: &str) -> TarotEntry {
        TarotEntry {
            id: id.to_string(),
            name: "바보".to_string(),
            content: "새로운 시작".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn duplicate_tarot_ids_rejected() {
        let e = TarotTable::new(vec![tarot("T001"), tarot("T001")]).unwrap_err();
        assert!(matches!(e, FortuneError::MalformedTable { table: "tarot", .. }));
    }

    #[test]
    fn tarot_lookup() {
        let t = TarotTable::new(vec![tarot("T001"), tarot("T002")]).unwrap();
        assert_eq!(t.len(), 2);
        assert!(t.get("T002").is_some());
        assert!(t.get("T003").is_none());
    }

    #[test]
    fn tarot_json_duplicate_fails() {
        let json = r#"[
            {"id":"T001","name":"a","content":"x"},
            {"id":"T001","name":"b","content":"y"}
        ]"#;
        assert!(serde_json::from_str::<TarotTable>(json).is_err());
    }

    #[test]
    fn phrase_pick_from_bank() {
        let json = r#"{"Money":{"재물상승":["돈이 들어옵니다","투자 기회"]}}"#;
        let bank: PhraseBank = serde_json::from_str(json).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let p = bank
            .pick(Category::Wealth, Keyword::WealthRising, &mut rng)
            .unwrap();
        let filed = bank.phrases(Category::Wealth, Keyword::WealthRising);
        assert!(filed.iter().any(|s| s == p));
        assert!(bank.pick(Category::Wealth, Keyword::Overspending, &mut rng).is_none());
        assert!(bank.pick(Category::Health, Keyword::HealthGood, &mut rng).is_none());
    }

    #[test]
    fn empty_bank_yields_category_default() {
        let bank = PhraseBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(bank.pick(Category::Health, Keyword::Fatigue, &mut rng).is_none());
        assert_eq!(
            bank.pick_or_default(Category::Health, Keyword::Fatigue, &mut rng),
            Category::Health.default_text()
        );
        assert_eq!(
            bank.pick_or_default(Category::Advice, Keyword::ActNow, &mut rng),
            "오늘의 조언을 불러올 수 없습니다."
        );
    }

    #[test]
    fn filled_entry_is_not_replaced_by_default() {
        let json = r#"{"Main":{"좋음":["좋은 하루"],"보통":[]}}"#;
        let bank: PhraseBank = serde_json::from_str(json).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            bank.pick_or_default(Category::Overall, Keyword::Good, &mut rng),
            "좋은 하루"
        );
        assert_eq!(
            bank.pick_or_default(Category::Overall, Keyword::Average, &mut rng),
            Category::Overall.default_text()
        );
    }

    #[test]
    fn horoscope_filter() {
        let t = HoroscopeTable::new(vec![
            HoroscopeEntry {
                sign: "AR".into(),
                keyword: String::new(),
                content: "a".into(),
            },
            HoroscopeEntry {
                sign: "TA".into(),
                keyword: String::new(),
                content: "b".into(),
            },
            HoroscopeEntry {
                sign: "ar".into(),
                keyword: String::new(),
                content: "c".into(),
            },
        ]);
        let aries = t.for_sign(ZodiacSign::Aries);
        assert_eq!(aries.len(), 2);
        assert_eq!(aries[1].content, "c");
        assert!(t.for_sign(ZodiacSign::Leo).is_empty());
    }

    #[test]
    fn bundle_table_json_keys_are_element_names() {
        let json = r#"{"Wood":{"intro":"성장","colors":["초록"]}}"#;
        let t: ElementBundleTable = serde_json::from_str(json).unwrap();
        let b = t.get(Element::Wood).unwrap();
        assert_eq!(b.colors, vec!["초록".to_string()]);
        assert!(b.items.is_empty());
        assert!(t.get(Element::Fire).is_none());
    }
}
