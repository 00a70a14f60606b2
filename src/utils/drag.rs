//! Scoped pointer tracking for the side panel divider.
//!
//! A [`ResizeGesture`] owns the window listeners of one drag. They exist from
//! mouse-down until the gesture is dropped: on mouse-up (anywhere, including
//! outside the panel), when the window loses focus, or when the owning
//! component is torn down.

use codeview_core::{DragAnchor, SidebarBounds};
use leptos::ev;
use leptos::prelude::*;

use super::dom;

/// Slot the divider keeps its running gesture in.
pub type GestureSlot = StoredValue<Option<ResizeGesture>, LocalStorage>;

pub struct ResizeGesture {
    listeners: Vec<WindowListenerHandle>,
}

impl ResizeGesture {
    /// Start tracking the pointer and write clamped widths into `width`.
    ///
    /// Any gesture already in `slot` is ended first.
    pub fn begin(
        slot: GestureSlot,
        anchor: DragAnchor,
        bounds: SidebarBounds,
        width: RwSignal<f64>,
    ) {
        end(slot);

        let on_move = window_event_listener(ev::mousemove, move |event| {
            width.set(anchor.width_at(f64::from(event.client_x()), bounds));
        });
        let on_up = window_event_listener(ev::mouseup, move |_| end(slot));
        let on_blur = window_event_listener(ev::blur, move |_| end(slot));

        dom::set_drag_cursor(Some("col-resize"));
        slot.set_value(Some(Self {
            listeners: vec![on_move, on_up, on_blur],
        }));
    }
}

impl Drop for ResizeGesture {
    fn drop(&mut self) {
        for handle in self.listeners.drain(..) {
            handle.remove();
        }
        dom::set_drag_cursor(None);
    }
}

/// End the gesture in `slot`, if any.
pub fn end(slot: GestureSlot) {
    // Take first so the listeners are removed outside the slot's lock.
    let gesture = slot.try_update_value(Option::take).flatten();
    drop(gesture);
}
