//! Deterministic daily fortune engine.
//!
//! This crate provides:
//! - Category scoring from elemental interaction, season and a daily hash
//! - Seeded tarot card draw with reversal
//! - Horoscope selection from closed-form planetary signals
//! - Lucky-elements bundle selection
//! - The orchestrator composing them into a [`FortuneResult`]
//!
//! Content tables are injected by the caller; nothing here performs I/O.

pub mod category;
pub mod config;
pub mod content;
pub mod error;
pub mod fortune;
pub mod fortune_types;
pub mod horoscope;
pub mod lucky;
pub mod profile;
pub mod scorer;
pub mod tarot;

pub use category::{ALL_CATEGORIES, Category, CategoryWeights, Keyword, luck_keyword};
pub use config::{DEFAULT_REVERSAL_THRESHOLD, FortuneConfig};
pub use content::{
    ContentTables, ElementBundle, ElementBundleTable, HoroscopeEntry, HoroscopeTable, PhraseBank,
    TAROT_TABLE_LEN, TarotEntry, TarotTable,
};
pub use error::FortuneError;
pub use fortune::{calculate_fortune, corrected_birth_date};
pub use fortune_types::FortuneResult;
pub use horoscope::{
    DEFAULT_HOROSCOPE_TEXT, HoroscopePick, PlanetarySignals, horoscope_index, planetary_signals,
    select_horoscope,
};
pub use lucky::{Direction, LuckyBundle, lucky_seed, select_lucky, theme_element, unit};
pub use profile::{BirthInstant, BirthProfile, BirthProfileInput};
pub use scorer::{CategoryResult, ScoreTerms, combine, daily_variation, score, score_terms};
pub use tarot::{
    CardDraw, DECK_SIZE, DEFAULT_TAROT_TEXT, TarotCard, cosmic_seed, destiny_energy, full_deck,
    hour_weight, reversed_hash, select_card, time_energy,
};
