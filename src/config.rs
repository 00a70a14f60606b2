//! Application configuration.
//!
//! Compile-time constants plus the embedded assets the viewer falls back to.
//! Runtime-tunable settings live in `assets/config/viewer.toml` and are parsed
//! into [`codeview_core::ViewerConfig`].

// =============================================================================
// Embedded Assets (loaded at compile time)
// =============================================================================

/// Viewer settings (read-only flag, sidebar bounds, display options).
pub const VIEWER_TOML: &str = include_str!("../assets/config/viewer.toml");

/// Demo file map shown when the host page supplies none.
pub const DEMO_FILES_JSON: &str = include_str!("../assets/demo/files.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the explorer header.
pub const APP_NAME: &str = "Editor";

// =============================================================================
// Host Integration
// =============================================================================

/// Global the host page may set to a `{ path: content }` object before boot.
pub const HOST_FILES_GLOBAL: &str = "__CODEVIEW_FILES__";

// =============================================================================
// UI Configuration
// =============================================================================

/// Horizontal indent per tree depth, in pixels.
pub const TREE_INDENT_PX: usize = 16;

/// Left padding of a depth-0 tree row, in pixels.
pub const TREE_BASE_PADDING_PX: usize = 8;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
