//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The crate is generic over the location type `L`: whatever identifies a
//! draggable's origin and a drop target's slot. A finished drag reports the
//! source location and the target under the pointer, or `None` when the
//! pointer was released outside every target.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set after a drop
const CLICK_SUPPRESS_MS: i32 = 100;

/// DnD state signals
pub struct DndSignals<L: Send + Sync + 'static> {
    /// Location of the card being dragged
    pub dragging_read: ReadSignal<Option<L>>,
    pub dragging_write: WriteSignal<Option<L>>,
    /// Target currently under the pointer
    pub drop_target_read: ReadSignal<Option<L>>,
    pub drop_target_write: WriteSignal<Option<L>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending location (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<L>>,
    pub pending_write: WriteSignal<Option<L>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<L: Send + Sync + 'static> Clone for DndSignals<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Send + Sync + 'static> Copy for DndSignals<L> {}

impl<L> DndSignals<L>
where
    L: Clone + PartialEq + Send + Sync + 'static,
{
    /// Reactive: is the draggable at `location` the one being dragged
    pub fn is_dragging(&self, location: &L) -> bool {
        self.dragging_read.with(|d| d.as_ref() == Some(location))
    }

    /// Reactive: is `location` the current drop target
    pub fn is_drop_target(&self, location: &L) -> bool {
        self.drop_target_read.with(|t| t.as_ref() == Some(location))
    }

    /// Reactive: is any drag in progress
    pub fn is_active(&self) -> bool {
        self.dragging_read.with(Option::is_some)
    }
}

pub fn create_dnd_signals<L: Send + Sync + 'static>() -> DndSignals<L> {
    let (dragging_read, dragging_write) = signal(None::<L>);
    let (drop_target_read, drop_target_write) = signal(None::<L>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<L>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<L: Send + Sync + 'static>(dnd: &DndSignals<L>) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggables
/// Records pending drag with start position
pub fn make_on_mousedown<L>(dnd: DndSignals<L>, location: L) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    L: Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(location.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Bind mousemove handler on document - starts drag if moved enough
fn bind_global_mousemove<L>(dnd: DndSignals<L>)
where
    L: Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.with_untracked(Option::is_none) {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<L>(dnd: DndSignals<L>, target: L) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    L: Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(Some(target.clone()));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<L>(dnd: DndSignals<L>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    L: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.with_untracked(Option::is_some) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
///
/// `on_drag_end(source, destination)` fires once per real drag; a press and
/// release without crossing the threshold is left to the click handlers.
pub fn bind_global_mouseup<L, F>(dnd: DndSignals<L>, on_drag_end: F)
where
    L: Clone + Send + Sync + 'static,
    F: Fn(L, Option<L>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        // A press without a drag is a plain click, nothing to report
        if let Some(source) = dragging {
            end_drag(&dnd);
            on_drag_end(source, drop_target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
