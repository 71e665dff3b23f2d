//! Board settings
//!
//! Persisted separately from the board itself, under its own key.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::KeyValueStore;

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key the column list is stored under
    pub storage_key: String,

    // === Capacities (the done column is always unbounded) ===
    pub todo_capacity: usize,
    pub in_progress_capacity: usize,

    // === Card input ===
    /// Fewest non-blank items a new card needs
    pub min_items: usize,
    /// Items beyond this are dropped
    pub max_items: usize,

    /// Progress a to-do card must exceed to advance
    pub promotion_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: BOARD_STORAGE_KEY.to_string(),

            todo_capacity: TODO_CAPACITY,
            in_progress_capacity: IN_PROGRESS_CAPACITY,

            min_items: MIN_ITEMS,
            max_items: MAX_ITEMS,

            promotion_threshold: PROMOTION_THRESHOLD,
        }
    }
}

impl Settings {
    /// Capacities for to-do, in-progress and done
    pub fn capacities(&self) -> [Option<usize>; 3] {
        [
            Some(self.todo_capacity),
            Some(self.in_progress_capacity),
            None,
        ]
    }

    /// Clamp values into a usable range
    pub fn sanitized(mut self) -> Self {
        if self.storage_key.trim().is_empty() {
            self.storage_key = BOARD_STORAGE_KEY.to_string();
        }
        self.todo_capacity = self.todo_capacity.max(1);
        self.in_progress_capacity = self.in_progress_capacity.max(1);
        self.max_items = self.max_items.max(1);
        self.min_items = self.min_items.clamp(1, self.max_items);
        if !(0.0..1.0).contains(&self.promotion_threshold) {
            self.promotion_threshold = PROMOTION_THRESHOLD;
        }
        self
    }

    /// Load settings from the store, falling back to defaults
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(SETTINGS_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings.sanitized();
                }
                Err(e) => log::error!("Error loading settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::error!("Error reading settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to the store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) {
        let result = serde_json::to_string(self)
            .map_err(crate::error::PersistenceError::Serialize)
            .and_then(|json| store.set(SETTINGS_STORAGE_KEY, &json));
        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::error!("Error saving settings: {}", e),
        }
    }
}
