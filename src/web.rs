//! Browser bindings
//!
//! `BoardHandle` is what the JS presentation layer talks to. The column-locked
//! signal is mirrored onto `<body class="column-locked">` after every call.

use wasm_bindgen::prelude::*;

use crate::board::CardId;
use crate::manager::NoteBoard;
use crate::persistence::{self, LocalStorageStore};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Note Board starting...");
}

#[wasm_bindgen]
pub struct BoardHandle {
    board: NoteBoard<LocalStorageStore>,
}

#[wasm_bindgen]
impl BoardHandle {
    /// Open the board saved in LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BoardHandle, JsValue> {
        let store = LocalStorageStore::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let seed = js_sys::Date::now() as u64;
        let handle = Self {
            board: NoteBoard::open(store, seed),
        };
        handle.sync_locked_class();
        Ok(handle)
    }

    /// Returns the new card id, or `undefined` with the reason in `errorMessage`
    #[wasm_bindgen(js_name = addCard)]
    pub fn add_card(&mut self, title: &str, items: &js_sys::Array) -> Option<String> {
        let items: Vec<String> = items.iter().filter_map(|v| v.as_string()).collect();
        self.board.add_card(title, items.as_slice()).ok().map(|id| id.0)
    }

    #[wasm_bindgen(js_name = setTitle)]
    pub fn set_title(&mut self, title: &str) {
        self.board.form_mut().title = title.to_string();
    }

    /// Out-of-range slots are ignored
    #[wasm_bindgen(js_name = setItem)]
    pub fn set_item(&mut self, index: usize, text: &str) {
        self.board.form_mut().set_item(index, text);
    }

    /// Add a card from the draft; same result as `addCard`
    #[wasm_bindgen(js_name = submitForm)]
    pub fn submit_form(&mut self) -> Option<String> {
        self.board.submit_form().ok().map(|id| id.0)
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.board.form().title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn items(&self) -> js_sys::Array {
        self.board
            .form()
            .items
            .iter()
            .map(|item| JsValue::from_str(item))
            .collect()
    }

    #[wasm_bindgen(js_name = toggleItem)]
    pub fn toggle_item(&mut self, card_id: &str, index: usize, done: bool) {
        self.board.toggle_item(&CardId::from(card_id), index, done);
        self.sync_locked_class();
    }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&mut self) {
        self.board.clear_all();
        self.sync_locked_class();
    }

    /// The column list in its persisted JSON shape, for rendering
    #[wasm_bindgen(js_name = columnsJson)]
    pub fn columns_json(&self) -> Result<String, JsValue> {
        persistence::encode(self.board.state()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter, js_name = columnLocked)]
    pub fn column_locked(&self) -> bool {
        self.board.column_locked()
    }

    #[wasm_bindgen(getter, js_name = errorMessage)]
    pub fn error_message(&self) -> Option<String> {
        self.board.form().error_message.clone()
    }

    fn sync_locked_class(&self) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(e) = body
            .class_list()
            .toggle_with_force("column-locked", self.board.column_locked())
        {
            log::warn!("Could not update body class: {:?}", e);
        }
    }
}
