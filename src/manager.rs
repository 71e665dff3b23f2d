//! Board manager
//!
//! Entry point for UI events. Owns the board state, the add-card form draft
//! and the store; every mutating call ends with a save.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::board::{BoardState, Card, CardId, Column, ColumnId, NewCard, ToggleOutcome};
use crate::clock::{Clock, SystemClock};
use crate::error::{LookupError, ValidationError};
use crate::persistence::{self, KeyValueStore};
use crate::settings::Settings;

/// Draft of the add-card form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardForm {
    pub title: String,
    /// One slot per allowed item; blank slots are ignored on submit
    pub items: Vec<String>,
    /// Message from the last rejected submit
    pub error_message: Option<String>,
}

impl CardForm {
    pub fn new(slots: usize) -> Self {
        Self {
            title: String::new(),
            items: vec![String::new(); slots],
            error_message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.items.len());
    }

    pub fn set_item(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = text.into();
        }
    }
}

pub struct NoteBoard<S: KeyValueStore, C: Clock = SystemClock> {
    state: BoardState,
    settings: Settings,
    form: CardForm,
    store: S,
    clock: C,
    rng: Pcg32,
}

impl<S: KeyValueStore> NoteBoard<S> {
    /// Board on the system clock, loaded from `store`
    pub fn open(store: S, seed: u64) -> Self {
        let settings = Settings::load(&store);
        let mut board = Self::with_clock(store, settings, SystemClock, seed);
        board.load();
        board
    }
}

impl<S: KeyValueStore, C: Clock> NoteBoard<S, C> {
    /// Empty board; call [`NoteBoard::load`] to restore persisted state
    pub fn with_clock(store: S, settings: Settings, clock: C, seed: u64) -> Self {
        let settings = settings.sanitized();
        Self {
            state: BoardState::new(settings.capacities()),
            form: CardForm::new(settings.max_items),
            settings,
            store,
            clock,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the in-memory board with the persisted one, if any.
    /// A missing or unreadable blob leaves the current board untouched.
    /// Capacities always come from the settings, not the blob.
    pub fn load(&mut self) {
        match persistence::load_board(&self.store, &self.settings.storage_key) {
            Ok(Some(mut state)) => {
                state.set_capacities(self.settings.capacities());
                log::info!("Loaded board ({} cards)", state.card_count());
                self.state = state;
            }
            Ok(None) => log::info!("No saved board found, starting fresh"),
            Err(e) => log::error!("Error loading board: {}", e),
        }
    }

    /// Write the board. Failures are logged; memory is not rolled back.
    pub fn save(&mut self) {
        match persistence::save_board(&mut self.store, &self.settings.storage_key, &self.state) {
            Ok(()) => log::debug!("Board saved ({} cards)", self.state.card_count()),
            Err(e) => log::error!("Error saving board: {}", e),
        }
    }

    /// Create a card in the to-do column
    pub fn add_card<T: AsRef<str>>(
        &mut self,
        title: &str,
        items: &[T],
    ) -> Result<CardId, ValidationError> {
        let result = NewCard::parse(title, items, self.settings.min_items, self.settings.max_items)
            .and_then(|new_card| {
                let card = new_card.into_card(self.fresh_id());
                let id = card.id.clone();
                self.state.insert_card(card).map(|()| id)
            });

        match result {
            Ok(id) => {
                log::info!("Card {} added", id);
                self.form.reset();
                self.save();
                Ok(id)
            }
            Err(e) => {
                log::debug!("Card rejected: {}", e);
                self.form.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Create a card from the form draft
    pub fn submit_form(&mut self) -> Result<CardId, ValidationError> {
        let title = self.form.title.clone();
        let items = self.form.items.clone();
        self.add_card(&title, items.as_slice())
    }

    /// Set an item's done flag and apply promotion. Unknown cards or
    /// indices are ignored without saving.
    pub fn toggle_item(&mut self, card_id: &CardId, index: usize, done: bool) -> ToggleOutcome {
        let outcome = self.state.toggle_item(
            card_id,
            index,
            done,
            self.clock.now(),
            self.settings.promotion_threshold,
        );
        match outcome {
            ToggleOutcome::Ignored => return outcome,
            ToggleOutcome::Promoted(column) => {
                log::info!("Card {} moved to column {}", card_id, column)
            }
            _ => {}
        }
        self.save();
        outcome
    }

    /// Move a card to the end of `target`. Nothing changes or saves on failure.
    pub fn move_card(&mut self, card_id: &CardId, target: ColumnId) -> Result<(), LookupError> {
        self.state.move_card(card_id, target)?;
        self.save();
        Ok(())
    }

    /// Empty every column, keeping ids and capacities
    pub fn clear_all(&mut self) {
        self.state.clear();
        log::info!("Board cleared");
        self.save();
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn columns(&self) -> &[Column] {
        &self.state.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.state.column(id)
    }

    pub fn find_card(&self, id: &CardId) -> Option<(ColumnId, &Card)> {
        self.state.find_card(id)
    }

    /// A card is waiting on a full in-progress column
    pub fn column_locked(&self) -> bool {
        self.state.column_locked
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn form(&self) -> &CardForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CardForm {
        &mut self.form
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fresh_id(&mut self) -> CardId {
        let millis = self.clock.unix_millis();
        loop {
            let id = CardId::generate(millis, &mut self.rng);
            if !self.state.card_ids().any(|existing| existing == &id) {
                return id;
            }
        }
    }
}
