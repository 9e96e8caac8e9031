//! Kanban Board App
//!
//! Main application component: add-list form on top, lists side by side.

use kanban_core::{resolve_gap, DragEnd, Position};
use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};

use crate::components::{AddListForm, ListColumn};
use crate::context::AppContext;
use crate::store::{store_apply_drag, use_kanban_store, KanbanStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = use_kanban_store();

    let dnd = create_dnd_signals::<Position>();
    let renaming = signal(None);
    provide_context(AppContext::new(dnd, renaming));

    // Drop targets report gaps; the engine wants final indices
    bind_global_mouseup(dnd, move |source: Position, gap: Option<Position>| {
        let destination = gap.map(|gap| resolve_gap(&source, gap));
        log::debug!("[DND] Drag ended: {:?} -> {:?}", source, destination);
        store_apply_drag(&store, &DragEnd::new(source, destination));
    });

    let list_ids = move || {
        store
            .board()
            .read()
            .lists()
            .iter()
            .map(|list| list.id.clone())
            .collect::<Vec<_>>()
    };

    view! {
        <div class="container">
            <h1 class="board-title">{move || store.title().get()}</h1>

            <AddListForm />

            <div class=move || if dnd.is_active() { "lists-container dragging" } else { "lists-container" }>
                <For
                    each=list_ids
                    key=|id| id.clone()
                    children=move |list_id| view! { <ListColumn list_id=list_id /> }
                />
            </div>

            <p class="board-count">
                {move || {
                    let board = store.board().read();
                    format!("{} lists, {} items", board.lists().len(), board.item_count())
                }}
            </p>
        </div>
    }
}
