//! Board persistence
//!
//! The whole column list is stored as one JSON array under a single key:
//! `[{"id":1,"max":3,"cards":[...]}, {"id":2,...}, {"id":3,"max":null,...}]`.
//! The column-locked flag is UI state and is never written.

pub mod store;

pub use store::{KeyValueStore, MemoryStore};
#[cfg(target_arch = "wasm32")]
pub use store::LocalStorageStore;

use crate::board::{BoardState, Column, ColumnId};
use crate::error::PersistenceError;

/// Serialize the column list
pub fn encode(board: &BoardState) -> Result<String, PersistenceError> {
    serde_json::to_string(&board.columns).map_err(PersistenceError::Serialize)
}

/// Parse a column list, rejecting anything but the three fixed columns in order
pub fn decode(json: &str) -> Result<BoardState, PersistenceError> {
    let columns: Vec<Column> = serde_json::from_str(json).map_err(PersistenceError::Deserialize)?;
    validate_layout(&columns)?;
    Ok(BoardState::from_columns(columns))
}

fn validate_layout(columns: &[Column]) -> Result<(), PersistenceError> {
    let ids: Vec<ColumnId> = columns.iter().map(|c| c.id).collect();
    if ids != ColumnId::all() {
        return Err(PersistenceError::InvalidLayout(format!(
            "expected columns [1, 2, 3], found {:?}",
            ids.iter().map(|id| id.0).collect::<Vec<_>>()
        )));
    }
    Ok(())
}

/// Read the board stored under `key`. `Ok(None)` when nothing is stored.
pub fn load_board<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<BoardState>, PersistenceError> {
    match store.get(key)? {
        Some(json) => decode(&json).map(Some),
        None => Ok(None),
    }
}

/// Write the board under `key`. On failure the stored blob is left as it was.
pub fn save_board<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    board: &BoardState,
) -> Result<(), PersistenceError> {
    let json = encode(board)?;
    store.set(key, &json)
}
