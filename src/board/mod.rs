//! Board core
//!
//! Pure state and rules, no storage or platform dependencies. Every
//! operation runs to completion on the caller's thread.

pub mod card;
pub mod column;
pub mod promotion;
pub mod state;

pub use card::{Card, CardId, ChecklistItem};
pub use column::{Column, ColumnId};
pub use promotion::{Promotion, evaluate};
pub use state::{BoardState, NewCard, ToggleOutcome};
