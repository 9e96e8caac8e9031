//! List Title Component
//!
//! Shows the list name; double-click to rename in place. Enter or blur
//! commits, Escape cancels.

use kanban_core::ListId;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_rename_list, use_kanban_store};

#[component]
pub fn ListTitle(list_id: ListId, name: Signal<String>) -> impl IntoView {
    let store = use_kanban_store();
    let ctx = use_app_context();
    let (draft, set_draft) = signal(String::new());

    let is_editing = {
        let id = list_id.clone();
        move || ctx.renaming.with(|r| r.as_deref() == Some(id.as_str()))
    };

    let start_edit = {
        let id = list_id.clone();
        move |_: web_sys::MouseEvent| {
            // The trailing click of a drop is not an edit request
            if ctx.dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            set_draft.set(name.get_untracked());
            ctx.set_renaming(Some(id.clone()));
        }
    };

    let commit = {
        let id = list_id.clone();
        Callback::new(move |_: ()| {
            if ctx.renaming.get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            store_rename_list(&store, &id, &draft.get_untracked());
            ctx.set_renaming(None);
        })
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            commit.run(());
        }
        "Escape" => ctx.set_renaming(None),
        _ => {}
    };

    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    view! {
        <Show
            when=is_editing
            fallback=move || view! {
                <span class="list-name" on:dblclick=start_edit.clone()>{move || name.get()}</span>
            }
        >
            <input
                type="text"
                class="list-name-input"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
                on:blur=move |_| commit.run(())
                node_ref=input_ref
            />
        </Show>
    }
}
