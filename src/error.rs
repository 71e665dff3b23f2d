//! Error types
//!
//! None of these are fatal. Validation errors are shown to the user as a
//! message, lookup errors are logged and ignored, persistence errors are
//! logged and leave the previous state in place.

use crate::board::{CardId, ColumnId};

/// Rejected card creation. `Display` is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Fill in the card title.")]
    BlankTitle,

    #[error("Add at least {min} checklist items.")]
    TooFewItems { min: usize, got: usize },

    #[error("The first column already holds {capacity} cards; no more can be added.")]
    ColumnFull { capacity: usize },

    #[error("Column not found.")]
    ColumnMissing,
}

/// A card or column that could not be found
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("card {0} not found")]
    UnknownCard(CardId),

    #[error("column {0} not found")]
    UnknownColumn(ColumnId),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}
