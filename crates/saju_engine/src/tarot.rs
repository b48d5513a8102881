//! Card selector over the built-in 78-card deck.
//!
//! 1. `cosmicSeed = doy*100 + (doy mod 29)*10 + weekday` shuffles the deck.
//! 2. `destinyEnergy = year + month*31 + day*17 + birthMinuteOfDay + stem*7`.
//! 3. `timeEnergy = hour*weight(hour) + floor(minute/10)`.
//! 4. The drawn card sits at `(destinyEnergy + timeEnergy) mod 78`.
//! 5. `reversedHash = (userSeed*17 + day*23 + timeSeed*7 + hour*11) mod 100`;
//!    reversed when below the threshold.
//!
//! Deck order is the 22 Major Arcana then Wands, Cups, Swords and Pentacles,
//! each Ace to King. Card `k` has upright id `T{2k+1}` and reversed id
//! `T{2k+2}`.

use saju_base::{HeavenlyStem, shuffle};
use saju_time::Moment;
use serde::Serialize;

use crate::content::{TarotEntry, TarotTable};
use crate::profile::BirthProfile;

/// Cards in the deck.
pub const DECK_SIZE: usize = 78;

/// Card text used when the tarot table has no row for the drawn identity.
pub const DEFAULT_TAROT_TEXT: &str = "타로 카드 해석을 불러올 수 없습니다.";

const MAJOR_ARCANA: [(&str, &str); 22] = [
    ("바보", "The Fool"),
    ("마법사", "The Magician"),
    ("여사제", "The High Priestess"),
    ("여황제", "The Empress"),
    ("황제", "The Emperor"),
    ("교황", "The Hierophant"),
    ("연인", "The Lovers"),
    ("전차", "The Chariot"),
    ("힘", "Strength"),
    ("은둔자", "The Hermit"),
    ("운명의 수레바퀴", "Wheel of Fortune"),
    ("정의", "Justice"),
    ("매달린 사람", "The Hanged Man"),
    ("죽음", "Death"),
    ("절제", "Temperance"),
    ("악마", "The Devil"),
    ("탑", "The Tower"),
    ("별", "The Star"),
    ("달", "The Moon"),
    ("태양", "The Sun"),
    ("심판", "Judgement"),
    ("세계", "The World"),
];

const SUITS: [(&str, &str); 4] = [
    ("완드", "Wands"),
    ("컵", "Cups"),
    ("검", "Swords"),
    ("펜타클", "Pentacles"),
];

const RANKS: [(&str, &str); 14] = [
    ("에이스", "Ace"),
    ("2", "Two"),
    ("3", "Three"),
    ("4", "Four"),
    ("5", "Five"),
    ("6", "Six"),
    ("7", "Seven"),
    ("8", "Eight"),
    ("9", "Nine"),
    ("10", "Ten"),
    ("시종", "Page"),
    ("기사", "Knight"),
    ("여왕", "Queen"),
    ("왕", "King"),
];

/// A card identity in deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TarotCard(u8);

impl TarotCard {
    /// Card at deck position `index mod 78`.
    pub const fn from_index(index: usize) -> Self {
        Self((index % DECK_SIZE) as u8)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn is_major(self) -> bool {
        self.index() < MAJOR_ARCANA.len()
    }

    /// Korean name, e.g. "완드 에이스".
    pub fn korean(self) -> String {
        match self.minor_parts() {
            None => MAJOR_ARCANA[self.index()].0.to_string(),
            Some((suit, rank)) => format!("{} {}", SUITS[suit].0, RANKS[rank].0),
        }
    }

    /// English name, e.g. "Ace of Wands".
    pub fn english(self) -> String {
        match self.minor_parts() {
            None => MAJOR_ARCANA[self.index()].1.to_string(),
            Some((suit, rank)) => format!("{} of {}", RANKS[rank].1, SUITS[suit].1),
        }
    }

    fn minor_parts(self) -> Option<(usize, usize)> {
        let minor = self.index().checked_sub(MAJOR_ARCANA.len())?;
        Some((minor / RANKS.len(), minor % RANKS.len()))
    }

    /// Table id of this card in the given orientation.
    pub fn id(self, reversed: bool) -> String {
        let n = 2 * self.index() + if reversed { 2 } else { 1 };
        format!("T{n:03}")
    }
}

/// The deck in canonical order.
pub fn full_deck() -> Vec<TarotCard> {
    (0..DECK_SIZE).map(TarotCard::from_index).collect()
}

/// A drawn card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDraw {
    pub card: TarotCard,
    /// Id of the identity actually drawn (reversed identity when reversed).
    pub card_id: String,
    pub name: String,
    pub english_name: String,
    pub is_reversed: bool,
    /// Interpretation from the table row, or [`DEFAULT_TAROT_TEXT`].
    pub content: String,
    /// Table row for `card_id`, when a tarot table was supplied.
    pub entry: Option<TarotEntry>,
}

/// `doy*100 + (doy mod 29)*10 + weekday`.
pub fn cosmic_seed(moment: &Moment) -> i64 {
    let doy = moment.date.day_of_year() as i64;
    doy * 100 + (doy % 29) * 10 + moment.date.weekday() as i64
}

pub fn destiny_energy(profile: &BirthProfile, user_stem: HeavenlyStem) -> i64 {
    let d = profile.date();
    d.year() as i64
        + d.month() as i64 * 31
        + d.day() as i64 * 17
        + profile.minute_of_day() as i64
        + user_stem.index() as i64 * 7
}

/// Weight of the reference hour: 3 for 03-06, 2 for 06-12, 1 for 12-18, else 4.
pub fn hour_weight(hour: u32) -> i64 {
    match hour {
        3..=5 => 3,
        6..=11 => 2,
        12..=17 => 1,
        _ => 4,
    }
}

pub fn time_energy(moment: &Moment) -> i64 {
    let hour = moment.time.hour();
    hour as i64 * hour_weight(hour) + (moment.time.minute() / 10) as i64
}

/// Reversal hash in 0..100.
pub fn reversed_hash(profile: &BirthProfile, moment: &Moment) -> u32 {
    let user_seed = profile.date_seed();
    let hour = moment.time.hour() as i64;
    let time_seed = moment.time.minute_of_day() as i64;
    let day = moment.date.day() as i64;
    (user_seed * 17 + day * 23 + time_seed * 7 + hour * 11).rem_euclid(100) as u32
}

/// Draw one card for `profile` at `moment`.
pub fn select_card(
    profile: &BirthProfile,
    user_stem: HeavenlyStem,
    moment: &Moment,
    reversal_threshold: u32,
    table: Option<&TarotTable>,
) -> CardDraw {
    let seed = cosmic_seed(moment);
    let deck = shuffle(&full_deck(), seed);
    let position = (destiny_energy(profile, user_stem) + time_energy(moment))
        .rem_euclid(DECK_SIZE as i64) as usize;
    debug_assert!(position < deck.len());
    let card = deck
        .get(position)
        .copied()
        .unwrap_or(TarotCard::from_index(0));

    let hash = reversed_hash(profile, moment);
    let is_reversed = hash < reversal_threshold;
    let card_id = card.id(is_reversed);
    tracing::debug!(seed, position, hash, card_id = %card_id, "card drawn");

    let entry = match table {
        Some(t) => {
            let e = t.get(&card_id).cloned();
            if e.is_none() {
                tracing::warn!(card_id = %card_id, "tarot table has no row for card");
            }
            e
        }
        None => None,
    };
    let content = entry
        .as_ref()
        .map_or_else(|| DEFAULT_TAROT_TEXT.to_string(), |e| e.content.clone());

    CardDraw {
        card,
        card_id,
        name: card.korean(),
        english_name: card.english(),
        is_reversed,
        content,
        entry,
    }
}
