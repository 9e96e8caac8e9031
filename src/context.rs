//! Application Context
//!
//! Shared state provided via Leptos Context API.

use kanban_core::{ListId, Position};
use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Drag state; draggables are item positions, targets are gaps
    pub dnd: DndSignals<Position>,
    /// List whose title is being edited - read
    pub renaming: ReadSignal<Option<ListId>>,
    /// List whose title is being edited - write
    set_renaming: WriteSignal<Option<ListId>>,
}

impl AppContext {
    pub fn new(
        dnd: DndSignals<Position>,
        renaming: (ReadSignal<Option<ListId>>, WriteSignal<Option<ListId>>),
    ) -> Self {
        Self {
            dnd,
            renaming: renaming.0,
            set_renaming: renaming.1,
        }
    }

    /// Start editing a list title (None = stop editing)
    pub fn set_renaming(&self, list_id: Option<ListId>) {
        self.set_renaming.set(list_id);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
