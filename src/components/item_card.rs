//! Item Card Component
//!
//! A draggable card. Hovering a card while dragging targets the gap above it.

use kanban_core::{Item, Position};
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, make_on_mouseleave, make_on_target_mouseenter};

use crate::context::use_app_context;

#[component]
pub fn ItemCard(location: Position, item: Item) -> impl IntoView {
    let dnd = use_app_context().dnd;

    let on_mousedown = make_on_mousedown(dnd, location.clone());
    let on_mouseenter = make_on_target_mouseenter(dnd, location.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = move || {
        let mut c = String::from("item-container");
        if dnd.is_dragging(&location) { c.push_str(" dragging"); }
        if dnd.is_drop_target(&location) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=card_class
            data-item-id=item.id
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {item.content}
        </div>
    }
}
