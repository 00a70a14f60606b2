//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Read a global variable set by the host page.
///
/// Returns `None` when it is missing, `undefined` or `null`.
pub fn host_global(name: &str) -> Option<JsValue> {
    let window = window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Force a cursor on the whole page and block text selection while dragging.
///
/// `None` restores the stylesheet defaults.
pub fn set_drag_cursor(cursor: Option<&str>) {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    match cursor {
        Some(cursor) => {
            let _ = style.set_property("cursor", cursor);
            let _ = style.set_property("user-select", "none");
        }
        None => {
            let _ = style.remove_property("cursor");
            let _ = style.remove_property("user-select");
        }
    }
}
