//! Auto-promotion rules
//!
//! Full completion wins over partial progress. Partial progress only
//! advances cards that are still in the to-do column.

use super::card::Card;
use super::column::ColumnId;

/// Transition a card asks for after one of its items changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// Every item done: stamp and move to the done column
    Complete,
    /// Past the threshold while in to-do: move to in-progress if it has room
    Advance,
    /// No transition
    Stay,
}

pub fn evaluate(card: &Card, current: ColumnId, threshold: f64) -> Promotion {
    let Some(progress) = card.progress() else {
        return Promotion::Stay;
    };

    if progress >= 1.0 {
        Promotion::Complete
    } else if progress > threshold && current == ColumnId::TODO {
        Promotion::Advance
    } else {
        Promotion::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::card::CardId;
    use crate::consts::PROMOTION_THRESHOLD;

    fn card_with(done: &[bool]) -> Card {
        let mut card = Card::new(CardId::from("c"), "t", done.iter().map(|_| "item"));
        for (i, d) in done.iter().enumerate() {
            card.set_item_done(i, *d);
        }
        card
    }

    #[test]
    fn test_complete_takes_priority() {
        let card = card_with(&[true, true, true]);
        assert_eq!(evaluate(&card, ColumnId::TODO, PROMOTION_THRESHOLD), Promotion::Complete);
        assert_eq!(evaluate(&card, ColumnId::IN_PROGRESS, PROMOTION_THRESHOLD), Promotion::Complete);
    }

    #[test]
    fn test_advance_only_from_todo() {
        let card = card_with(&[true, true, false]);
        assert_eq!(evaluate(&card, ColumnId::TODO, PROMOTION_THRESHOLD), Promotion::Advance);
        assert_eq!(evaluate(&card, ColumnId::IN_PROGRESS, PROMOTION_THRESHOLD), Promotion::Stay);
    }

    #[test]
    fn test_exactly_half_does_not_advance() {
        let card = card_with(&[true, true, false, false]);
        assert_eq!(evaluate(&card, ColumnId::TODO, PROMOTION_THRESHOLD), Promotion::Stay);
    }

    #[test]
    fn test_no_items_never_promotes() {
        let card = card_with(&[]);
        assert_eq!(evaluate(&card, ColumnId::TODO, PROMOTION_THRESHOLD), Promotion::Stay);
    }
}
