//! File explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Search box plus tree, owns expansion and search state
//! - [`SearchBox`] - Filter input
//! - [`TreeView`] - Flattened, indented rows of the visible tree

#[allow(clippy::module_inception)]
mod explorer;
mod search;
mod tree_view;

pub use explorer::Explorer;
pub use search::SearchBox;
pub use tree_view::TreeView;
