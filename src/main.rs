//! Note Board entry point
//!
//! On the web the board is driven through `note_board::web::BoardHandle`.
//! Natively this runs a short walkthrough against an in-memory store.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use note_board::{ColumnId, MemoryStore, NoteBoard};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Note Board (native) starting...");

    let mut board = NoteBoard::open(MemoryStore::new(), 42);

    let id = match board.add_card("Groceries", &["Milk", "Eggs", "Bread"]) {
        Ok(id) => id,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };
    for index in 0..3 {
        let outcome = board.toggle_item(&id, index, true);
        log::info!("Toggled item {}: {:?}", index, outcome);
    }

    for column in board.columns() {
        println!("Column {} ({}): {} card(s)", column.id, column.id.label(), column.len());
        for card in &column.cards {
            let stamp = card
                .completed_at
                .map(|t| t.format("%d.%m.%Y, %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  {} [{}/{}] completed: {}", card.title, card.done_count(), card.items.len(), stamp);
        }
    }

    if let Some(done) = board.column(ColumnId::DONE) {
        println!("✓ {} card(s) done", done.len());
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is note_board::web::start, this is just to satisfy the compiler
}
