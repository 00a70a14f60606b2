//! Viewer components.
//!
//! - [`Viewer`] - Tab bar over the code view or the placeholder
//! - [`TabBar`] - One tab per open file
//! - [`CodeView`] - Renders a [`DisplayRequest`](codeview_core::DisplayRequest)

mod code_view;
mod tab_bar;
#[allow(clippy::module_inception)]
mod viewer;

pub use code_view::CodeView;
pub use tab_bar::TabBar;
pub use viewer::Viewer;
