//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board is
//! replaced wholesale on every change; components subscribe to the field.

use std::borrow::Cow;

use kanban_core::{Board, Clock, DragEnd, IdGenerator, ListId};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct KanbanState {
    /// Lists and their items, in display order
    pub board: Board,
    /// Heading above the board
    pub title: String,
}

impl KanbanState {
    pub fn new(board: Board, title: String) -> Self {
        Self { board, title }
    }
}

/// Type alias for the store
pub type KanbanStore = Store<KanbanState>;

/// Get the kanban store from context
pub fn use_kanban_store() -> KanbanStore {
    expect_context::<KanbanStore>()
}

/// Wall clock backed by `Date.now()`
#[derive(Clone, Copy, Debug)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

pub fn browser_ids() -> IdGenerator<BrowserClock> {
    IdGenerator::new(BrowserClock)
}

// ========================
// Store Helper Functions
// ========================

/// Apply a finished drag; the board is only replaced when something moved
pub fn store_apply_drag(store: &KanbanStore, event: &DragEnd) {
    let next = match store.board().read_untracked().reorder(event) {
        Ok(Cow::Owned(next)) => next,
        Ok(Cow::Borrowed(_)) => return,
        Err(e) => {
            log::error!("[DND] drop rejected: {}", e);
            return;
        }
    };
    *store.board().write() = next;
}

/// Add a list at the end; returns false when the name was blank
pub fn store_add_list<C: Clock>(store: &KanbanStore, name: &str, ids: &IdGenerator<C>) -> bool {
    match store.board().write().add_list(name, ids) {
        Ok(id) => {
            log::info!("[APP] Added list {}", id);
            true
        }
        Err(e) => {
            log::debug!("[APP] Ignored add list: {}", e);
            false
        }
    }
}

/// Add an item to the end of a list; returns false when nothing was added
pub fn store_add_item<C: Clock>(
    store: &KanbanStore,
    list_id: &str,
    content: &str,
    ids: &IdGenerator<C>,
) -> bool {
    match store.board().write().add_item(list_id, content, ids) {
        Ok(id) => {
            log::info!("[APP] Added item {} to list {}", id, list_id);
            true
        }
        Err(e) => {
            log::debug!("[APP] Ignored add item: {}", e);
            false
        }
    }
}

/// Remove a list (and its items) by ID
pub fn store_remove_list(store: &KanbanStore, list_id: &ListId) {
    if let Err(e) = store.board().write().remove_list(list_id) {
        log::warn!("[APP] Remove list failed: {}", e);
    }
}

/// Rename a list; blank names are ignored
pub fn store_rename_list(store: &KanbanStore, list_id: &ListId, name: &str) {
    if let Err(e) = store.board().write().rename_list(list_id, name) {
        log::debug!("[APP] Ignored rename: {}", e);
    }
}
