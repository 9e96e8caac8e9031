//! Add List Form Component
//!
//! Text input plus submit button that appends a new empty list.

use leptos::prelude::*;

use crate::store::{browser_ids, store_add_list, use_kanban_store};

#[component]
pub fn AddListForm() -> impl IntoView {
    let store = use_kanban_store();
    let (new_name, set_new_name) = signal(String::new());

    let add_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_list(&store, &new_name.get_untracked(), &browser_ids()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="add-list-form" on:submit=add_list>
            <input
                type="text"
                class="add-list-input"
                placeholder="Add new list"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit" class="add-list-btn">"Add List"</button>
        </form>
    }
}
