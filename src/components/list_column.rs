//! List Column Component
//!
//! One list: title bar with remove button, draggable cards with drop gaps
//! between them, and the add-item form.

use kanban_core::{ListId, Position};
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, DropZone, ItemCard, ListTitle, NewItemForm};
use crate::store::{store_remove_list, use_kanban_store, KanbanStateStoreFields};

#[component]
pub fn ListColumn(list_id: ListId) -> impl IntoView {
    let store = use_kanban_store();

    let name = {
        let id = list_id.clone();
        Signal::derive(move || {
            store
                .board()
                .read()
                .list(&id)
                .map(|list| list.name.clone())
                .unwrap_or_default()
        })
    };

    let cards = {
        let id = list_id.clone();
        move || {
            store
                .board()
                .read()
                .list(&id)
                .map(|list| list.items.iter().cloned().enumerate().collect::<Vec<_>>())
                .unwrap_or_default()
        }
    };

    let len = {
        let id = list_id.clone();
        move || store.board().read().list(&id).map_or(0, |list| list.len())
    };

    let on_remove = {
        let id = list_id.clone();
        Callback::new(move |_: ()| store_remove_list(&store, &id))
    };

    let card_list_id = list_id.clone();
    let tail_list_id = list_id.clone();

    view! {
        <div class="list-container">
            <h3 class="list-title">
                <ListTitle list_id=list_id.clone() name=name />
                <DeleteConfirmButton label="Remove" button_class="remove-btn" on_confirm=on_remove />
            </h3>

            <div class="list-items">
                <For
                    each=cards
                    // Index is part of the key: a card's drag origin changes when it moves
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, item)| {
                        let gap = Position::new(card_list_id.clone(), index);
                        view! {
                            <DropZone gap=gap.clone() />
                            <ItemCard location=gap item=item />
                        }
                    }
                />

                // Trailing gap covers the rest of the column
                {move || view! {
                    <DropZone gap=Position::new(tail_list_id.clone(), len()) tail=true />
                }}
            </div>

            <NewItemForm list_id=list_id />
        </div>
    }
}
