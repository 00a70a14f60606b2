//! Target-independent core of the code viewer.
//!
//! - [`tree`] - [`build_tree`] turns a flat path map into an ordered [`Node`] tree
//! - [`explorer`] - [`ExplorerState`]: folder expansion, search, visible rows
//! - [`tabs`] - [`TabState`]: open tabs and the active file
//! - [`layout`] - [`Theme`] and side panel sizing
//! - [`display`] - [`DisplayRequest`] for the code view and its line model
//! - [`config`] - [`ViewerConfig`] loaded from TOML
//! - [`source`] - parsing the host's JSON file map

pub mod config;
pub mod display;
pub mod error;
pub mod explorer;
pub mod layout;
pub mod source;
pub mod tabs;
pub mod tree;

pub use config::{SidebarConfig, ViewerConfig};
pub use display::{
    BRACKET_COLORS, DisplayOptions, DisplayRequest, RenderedLine, Segment, WhitespaceMode,
    line_count, render_lines,
};
pub use error::{ConfigError, SourceError};
pub use explorer::{ExplorerState, RowKind, TreeRow};
pub use layout::{DragAnchor, SidebarBounds, Theme};
pub use source::{FileMap, parse_file_map};
pub use tabs::TabState;
pub use tree::{
    FileKind, FileNode, FileTree, Folder, Language, Node, NodeId, SkipReason, SkippedPath,
    build_tree,
};
