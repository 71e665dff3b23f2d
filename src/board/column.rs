//! Board columns (workflow stages)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

/// Column identifier, persisted as a bare integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub u32);

impl ColumnId {
    pub const TODO: ColumnId = ColumnId(1);
    pub const IN_PROGRESS: ColumnId = ColumnId(2);
    pub const DONE: ColumnId = ColumnId(3);

    /// The fixed columns, in board order
    pub fn all() -> &'static [ColumnId] {
        &[ColumnId::TODO, ColumnId::IN_PROGRESS, ColumnId::DONE]
    }

    /// Stage name; `"unknown"` for ids outside the fixed three
    pub fn label(&self) -> &'static str {
        match *self {
            ColumnId::TODO => "to-do",
            ColumnId::IN_PROGRESS => "in-progress",
            ColumnId::DONE => "done",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered bucket of cards with an optional capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    /// `None` is unbounded
    pub max: Option<usize>,
    pub cards: Vec<Card>,
}

impl Column {
    pub fn new(id: ColumnId, max: Option<usize>) -> Self {
        Self {
            id,
            max,
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once the column holds `max` cards (never for unbounded columns)
    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.cards.len() >= max)
    }

    pub fn has_room(&self) -> bool {
        !self.is_full()
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.iter().any(|card| &card.id == id)
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| &card.id == id)
    }

    /// Remove the first card with this id
    pub fn take(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|card| &card.id == id)?;
        Some(self.cards.remove(index))
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str) -> Card {
        Card::new(CardId::from(id), "t", ["a", "b", "c"])
    }

    #[test]
    fn test_bounded_column_fills_up() {
        let mut column = Column::new(ColumnId::TODO, Some(2));
        assert!(column.has_room());
        column.push(card("a"));
        column.push(card("b"));
        assert!(column.is_full());
    }

    #[test]
    fn test_unbounded_column_never_full() {
        let mut column = Column::new(ColumnId::DONE, None);
        for i in 0..100 {
            column.push(card(&i.to_string()));
        }
        assert!(!column.is_full());
    }

    #[test]
    fn test_take_removes_first_match_only() {
        let mut column = Column::new(ColumnId::TODO, None);
        column.push(card("a"));
        column.push(card("b"));
        column.push(card("a"));
        assert!(column.take(&CardId::from("a")).is_some());
        assert_eq!(column.len(), 2);
        assert_eq!(column.cards[0].id, CardId::from("b"));
        assert!(column.take(&CardId::from("zzz")).is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColumnId::IN_PROGRESS.label(), "in-progress");
        assert_eq!(ColumnId(9).label(), "unknown");
    }

    #[test]
    fn test_unbounded_serializes_as_null() {
        let json = serde_json::to_string(&Column::new(ColumnId::DONE, None)).unwrap();
        assert_eq!(json, r#"{"id":3,"max":null,"cards":[]}"#);
    }
}
