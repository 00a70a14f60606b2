//! Browser-side helpers.
//!
//! - [`dom`] - window, body and host globals
//! - [`drag`] - [`ResizeGesture`] for the side panel divider
//! - [`source`] - [`load_file_map`] from the host page or the demo map

pub mod dom;
pub mod drag;
pub mod source;

pub use drag::{GestureSlot, ResizeGesture};
pub use source::load_file_map;
