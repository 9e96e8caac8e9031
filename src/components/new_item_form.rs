//! New Item Form Component
//!
//! Per-list form for appending an item. Each list keeps its own draft.

use kanban_core::ListId;
use leptos::prelude::*;

use crate::store::{browser_ids, store_add_item, use_kanban_store};

#[component]
pub fn NewItemForm(list_id: ListId) -> impl IntoView {
    let store = use_kanban_store();
    let (draft, set_draft) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &list_id, &draft.get_untracked(), &browser_ids()) {
            set_draft.set(String::new());
        }
    };

    view! {
        <form class="add-item-form" on:submit=create_item>
            <input
                type="text"
                class="add-item-input"
                placeholder="Add new item"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit" class="add-item-btn">"Add"</button>
        </form>
    }
}
