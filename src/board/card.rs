//! Cards and their checklist items

use std::fmt;

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::CARD_ID_SUFFIX_LEN;

/// Unique card identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Build an id from a millisecond timestamp and a random base-36 suffix
    pub fn generate<R: Rng>(unix_millis: i64, rng: &mut R) -> Self {
        const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
        let suffix: String = (0..CARD_ID_SUFFIX_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(format!("{unix_millis}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One line of a card's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A titled checklist tracked across the board's columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub items: Vec<ChecklistItem>,
    /// Set exactly when every item is done
    #[serde(default, with = "completed_at_format")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Card {
    /// New card with every item not done
    pub fn new<I, S>(id: CardId, title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            title: title.into(),
            items: items.into_iter().map(ChecklistItem::new).collect(),
            completed_at: None,
        }
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Fraction of items done, or `None` for a card without items
    pub fn progress(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.done_count() as f64 / self.items.len() as f64)
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.done)
    }

    /// Set one item's done flag. Returns false if the index is out of range.
    pub fn set_item_done(&mut self, index: usize, done: bool) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.done = done;
                true
            }
            None => false,
        }
    }

    /// Stamp the completion time, truncated to the minute (the persisted precision)
    pub fn mark_completed(&mut self, now: NaiveDateTime) {
        let stamp = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        self.completed_at = Some(stamp);
    }
}

/// `completedAt` as the user-facing local string, e.g. `"05.03.2024, 14:07"`
mod completed_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d.%m.%Y, %H:%M";

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_new_card_items_not_done() {
        let card = Card::new(CardId::from("c1"), "Groceries", ["Milk", "Eggs", "Bread"]);
        assert_eq!(card.items.len(), 3);
        assert!(card.items.iter().all(|item| !item.done));
        assert_eq!(card.completed_at, None);
        assert_eq!(card.progress(), Some(0.0));
    }

    #[test]
    fn test_progress_and_completion() {
        let mut card = Card::new(CardId::from("c1"), "t", ["a", "b", "c"]);
        assert!(card.set_item_done(0, true));
        assert!(card.set_item_done(1, true));
        assert!((card.progress().unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert!(!card.is_complete());
        assert!(card.set_item_done(2, true));
        assert!(card.is_complete());
        assert!(!card.set_item_done(3, true));
    }

    #[test]
    fn test_empty_card_has_no_progress() {
        let card = Card::new(CardId::from("c1"), "t", Vec::<String>::new());
        assert_eq!(card.progress(), None);
        assert!(!card.is_complete());
    }

    #[test]
    fn test_generated_ids_have_timestamp_prefix() {
        let mut rng = Pcg32::seed_from_u64(7);
        let a = CardId::generate(1_700_000_000_000, &mut rng);
        let b = CardId::generate(1_700_000_000_000, &mut rng);
        assert!(a.as_str().starts_with("1700000000000"));
        assert_eq!(a.as_str().len(), 13 + CARD_ID_SUFFIX_LEN);
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_json_shape() {
        let mut card = Card::new(CardId::from("c1"), "Groceries", ["Milk", "Eggs", "Bread"]);
        card.mark_completed(at(14, 7, 42));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], "c1");
        assert_eq!(json["completedAt"], "05.03.2024, 14:07");
        assert_eq!(json["items"][0]["text"], "Milk");
        assert_eq!(json["items"][0]["done"], false);

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_null_completed_at() {
        let json = r#"{"id":"x","title":"t","items":[],"completedAt":null}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.completed_at, None);
    }
}
