//! Two-pane layout: explorer sidebar, draggable divider, viewer.

mod divider;
#[allow(clippy::module_inception)]
mod shell;

pub use divider::Divider;
pub use shell::Shell;
