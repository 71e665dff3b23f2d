//! Board state and the card lifecycle
//!
//! A card enters in the to-do column and only ever moves forward:
//! to-do -> in-progress (partial progress, capacity permitting),
//! to-do/in-progress -> done (every item done). Nothing leaves done.

use chrono::NaiveDateTime;

use super::card::{Card, CardId};
use super::column::{Column, ColumnId};
use super::promotion::{Promotion, evaluate};
use crate::consts::*;
use crate::error::{LookupError, ValidationError};

/// Result of toggling a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Unknown card or item index; nothing changed
    Ignored,
    /// Item updated, card stayed where it was
    Updated,
    /// Item updated and the card moved to this column
    Promoted(ColumnId),
    /// Card wanted to advance but in-progress is full; `column_locked` is now set
    Blocked,
}

impl ToggleOutcome {
    /// Whether the board changed (and should be saved)
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ToggleOutcome::Ignored)
    }
}

/// Validated input for a new card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub title: String,
    pub items: Vec<String>,
}

impl NewCard {
    /// Trim the title and items, drop blank items, keep at most `max_items`
    pub fn parse<S: AsRef<str>>(
        title: &str,
        items: &[S],
        min_items: usize,
        max_items: usize,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankTitle);
        }

        let items: Vec<String> = items
            .iter()
            .map(|item| item.as_ref().trim())
            .filter(|item| !item.is_empty())
            .take(max_items)
            .map(str::to_string)
            .collect();
        if items.len() < min_items {
            return Err(ValidationError::TooFewItems {
                min: min_items,
                got: items.len(),
            });
        }

        Ok(Self {
            title: title.to_string(),
            items,
        })
    }

    pub fn into_card(self, id: CardId) -> Card {
        Card::new(id, self.title, self.items)
    }
}

/// The three fixed columns plus the capacity-pressure signal
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub columns: Vec<Column>,
    /// A card wants to advance but in-progress is full. Cleared by the next
    /// successful move. Not persisted.
    pub column_locked: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new([Some(TODO_CAPACITY), Some(IN_PROGRESS_CAPACITY), None])
    }
}

impl BoardState {
    /// Empty board with the given capacities for to-do, in-progress and done
    pub fn new(capacities: [Option<usize>; 3]) -> Self {
        let columns = ColumnId::all()
            .iter()
            .zip(capacities)
            .map(|(id, max)| Column::new(*id, max))
            .collect();
        Self {
            columns,
            column_locked: false,
        }
    }

    /// Board restored from a persisted column list
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            column_locked: false,
        }
    }

    /// Capacities of the current columns, in board order
    pub fn capacities(&self) -> [Option<usize>; 3] {
        let mut caps = [Some(TODO_CAPACITY), Some(IN_PROGRESS_CAPACITY), None];
        for (slot, id) in caps.iter_mut().zip(ColumnId::all()) {
            if let Some(column) = self.column(*id) {
                *slot = column.max;
            }
        }
        caps
    }

    /// Overwrite the column capacities, in board order
    pub fn set_capacities(&mut self, capacities: [Option<usize>; 3]) {
        for (id, max) in ColumnId::all().iter().zip(capacities) {
            if let Some(column) = self.column_mut(*id) {
                column.max = max;
            }
        }
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn column_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.id == id)
    }

    /// First column holding this card
    pub fn locate(&self, id: &CardId) -> Option<ColumnId> {
        self.columns.iter().find(|c| c.contains(id)).map(|c| c.id)
    }

    pub fn find_card(&self, id: &CardId) -> Option<(ColumnId, &Card)> {
        self.columns
            .iter()
            .find_map(|c| c.card(id).map(|card| (c.id, card)))
    }

    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> {
        self.columns.iter().flat_map(|c| c.cards.iter().map(|card| &card.id))
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Append a new card to the to-do column, respecting its capacity
    pub fn insert_card(&mut self, card: Card) -> Result<(), ValidationError> {
        let todo = self
            .column_mut(ColumnId::TODO)
            .ok_or(ValidationError::ColumnMissing)?;
        if todo.is_full() {
            return Err(ValidationError::ColumnFull {
                capacity: todo.max.unwrap_or_default(),
            });
        }
        todo.push(card);
        Ok(())
    }

    /// Set one item's done flag, then apply the promotion rules
    pub fn toggle_item(
        &mut self,
        card_id: &CardId,
        index: usize,
        done: bool,
        now: NaiveDateTime,
        threshold: f64,
    ) -> ToggleOutcome {
        let Some(column_id) = self.locate(card_id) else {
            return ToggleOutcome::Ignored;
        };
        let Some(card) = self.column_mut(column_id).and_then(|c| c.card_mut(card_id)) else {
            return ToggleOutcome::Ignored;
        };
        if !card.set_item_done(index, done) {
            return ToggleOutcome::Ignored;
        }

        match evaluate(card, column_id, threshold) {
            Promotion::Complete => {
                card.mark_completed(now);
                // Also taken by cards already in done: they go to the back
                match self.move_card(card_id, ColumnId::DONE) {
                    Ok(()) => ToggleOutcome::Promoted(ColumnId::DONE),
                    Err(_) => ToggleOutcome::Updated,
                }
            }
            Promotion::Advance => {
                let has_room = self
                    .column(ColumnId::IN_PROGRESS)
                    .is_some_and(Column::has_room);
                if has_room && self.move_card(card_id, ColumnId::IN_PROGRESS).is_ok() {
                    ToggleOutcome::Promoted(ColumnId::IN_PROGRESS)
                } else {
                    log::warn!("Card {} cannot advance: in-progress column is full", card_id);
                    self.column_locked = true;
                    ToggleOutcome::Blocked
                }
            }
            Promotion::Stay => {
                // A done card with an item unticked is no longer complete
                if !card.is_complete() {
                    card.completed_at = None;
                }
                ToggleOutcome::Updated
            }
        }
    }

    /// Move a card to the end of another column.
    ///
    /// The target is checked before the card is removed, so a failed move
    /// leaves the board untouched. Capacity is not enforced here.
    pub fn move_card(&mut self, card_id: &CardId, target: ColumnId) -> Result<(), LookupError> {
        if self.column(target).is_none() {
            log::warn!("Column {} not found, move of card {} abandoned", target, card_id);
            return Err(LookupError::UnknownColumn(target));
        }

        let card = self
            .columns
            .iter_mut()
            .find_map(|c| c.take(card_id))
            .ok_or_else(|| LookupError::UnknownCard(card_id.clone()))?;

        if let Some(column) = self.column_mut(target) {
            column.push(card);
        }
        self.column_locked = false;
        Ok(())
    }

    /// Empty every column, keeping ids and capacities
    pub fn clear(&mut self) {
        *self = Self::new(self.capacities());
    }
}
