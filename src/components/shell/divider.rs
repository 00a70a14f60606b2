//! Draggable divider between the sidebar and the viewer.

use codeview_core::{DragAnchor, SidebarBounds};
use leptos::prelude::*;

use crate::utils::drag;
use crate::utils::{GestureSlot, ResizeGesture};

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Divider that resizes the sidebar while dragged.
///
/// Pointer tracking is window-wide for the duration of one drag so releasing
/// outside the divider still ends it.
#[component]
pub fn Divider(width: RwSignal<f64>, bounds: SidebarBounds) -> impl IntoView {
    let gesture: GestureSlot = StoredValue::new_local(None);

    on_cleanup(move || drag::end(gesture));

    let on_mouse_down = move |event: leptos::ev::MouseEvent| {
        event.prevent_default();
        let anchor = DragAnchor::new(f64::from(event.client_x()), width.get_untracked());
        ResizeGesture::begin(gesture, anchor, bounds, width);
    };

    view! {
        <div
            class=css::divider
            on:mousedown=on_mouse_down
            role="separator"
            aria-orientation="vertical"
            aria-valuemin=bounds.min.to_string()
            aria-valuemax=bounds.max.to_string()
            aria-valuenow=move || width.get().round().to_string()
        ></div>
    }
}
