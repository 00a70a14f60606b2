//! UI components built with Leptos.
//!
//! - [`Shell`] - Split layout (sidebar, divider, viewer, status bar)
//! - [`explorer`] - File tree with search
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Status bar for the active file
//! - [`viewer`] - Tab bar and code view

pub mod explorer;
pub mod icons;
pub mod shell;
pub mod status;
pub mod viewer;

pub use shell::Shell;
