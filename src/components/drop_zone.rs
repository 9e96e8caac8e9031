//! Drop Zone Component
//!
//! A gap between cards that accepts the dragged card.

use kanban_core::Position;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use crate::context::use_app_context;

/// Drop zone shown between cards to indicate the insertion gap
#[component]
pub fn DropZone(
    /// List and gap index the card would be inserted at
    gap: Position,
    /// Stretch to fill the rest of the column
    #[prop(optional)]
    tail: bool,
) -> impl IntoView {
    let dnd = use_app_context().dnd;

    let on_mouseenter = make_on_target_mouseenter(dnd, gap.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if tail { c.push_str(" tail"); }
        if !dnd.is_active() { c.push_str(" hidden"); }
        if dnd.is_drop_target(&gap) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
