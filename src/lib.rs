//! Note Board - a three-column checklist board
//!
//! Core modules:
//! - `board`: Deterministic board core (cards, columns, promotion rules)
//! - `persistence`: Key-value store seam and load/save of the column list
//! - `manager`: Board facade driven by UI events, saves after every mutation
//! - `settings`: Storage keys, capacities and item limits
//! - `web`: Browser bindings (wasm32 only)

pub mod board;
pub mod clock;
pub mod error;
pub mod manager;
pub mod persistence;
pub mod settings;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use board::{BoardState, Card, CardId, ChecklistItem, Column, ColumnId, ToggleOutcome};
pub use error::{LookupError, PersistenceError, ValidationError};
pub use manager::{CardForm, NoteBoard};
pub use persistence::{KeyValueStore, MemoryStore};
pub use settings::Settings;

/// Board layout constants
pub mod consts {
    /// Capacity of the to-do column
    pub const TODO_CAPACITY: usize = 3;
    /// Capacity of the in-progress column
    pub const IN_PROGRESS_CAPACITY: usize = 5;

    /// Fewest non-blank checklist items a card may have
    pub const MIN_ITEMS: usize = 3;
    /// Most checklist items a card may have (extra input is dropped)
    pub const MAX_ITEMS: usize = 5;

    /// A card in the to-do column advances once progress exceeds this
    pub const PROMOTION_THRESHOLD: f64 = 0.5;

    /// Storage key holding the serialized column list
    pub const BOARD_STORAGE_KEY: &str = "notes";
    /// Storage key holding the serialized settings
    pub const SETTINGS_STORAGE_KEY: &str = "note_board_settings";

    /// Length of the random suffix appended to card ids
    pub const CARD_ID_SUFFIX_LEN: usize = 10;
}
