//! Root application module.
//!
//! Loads the file map and viewer configuration, builds the tree once, and
//! provides [`AppContext`] to the component tree.

use codeview_core::{FileTree, Theme, ViewerConfig, build_tree};
use leptos::prelude::*;
use leptos_use::use_preferred_dark;

use crate::components::Shell;
use crate::config::VIEWER_TOML;
use crate::error::AppError;
use crate::utils::load_file_map;

// ============================================================================
// Workspace
// ============================================================================

/// Everything loaded once at startup.
pub struct Workspace {
    pub tree: FileTree,
    pub config: ViewerConfig,
}

impl Workspace {
    /// Read the configuration and file map and build the tree.
    ///
    /// Paths dropped by the builder are reported as console warnings.
    pub fn load() -> Result<Self, AppError> {
        let config = ViewerConfig::from_toml(VIEWER_TOML)?;
        let (files, source) = load_file_map()?;
        let tree = build_tree(files);

        for skipped in &tree.skipped {
            web_sys::console::warn_1(
                &format!("Skipped '{}': {}", skipped.path, skipped.reason).into(),
            );
        }
        web_sys::console::log_1(
            &format!("Loaded {} files from {}", tree.file_count(), source).into(),
        );

        Ok(Self { tree, config })
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// The tree and configuration never change after startup; the theme is the
/// only shared reactive state. Tabs, sidebar width, expansion and search are
/// owned by the components that use them.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable file tree built from the file map.
    pub tree: StoredValue<FileTree>,
    /// Viewer configuration.
    pub config: StoredValue<ViewerConfig>,
    /// Current colour theme.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Create the context; `prefers_dark` picks the theme unless the
    /// configuration pins one.
    pub fn new(workspace: Workspace, prefers_dark: bool) -> Self {
        let theme = workspace.config.theme.unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });

        Self {
            tree: StoredValue::new(workspace.tree),
            config: StoredValue::new(workspace.config),
            theme: RwSignal::new(theme),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Root application component with error boundary.
///
/// Startup failures (bad file map, bad configuration) render the fallback
/// instead of the shell.
#[component]
pub fn App() -> impl IntoView {
    let loaded = Workspace::load().map(|workspace| {
        let prefers_dark = use_preferred_dark().get_untracked();
        provide_context(AppContext::new(workspace, prefers_dark));
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f9fafb;
                    color: #374151;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #dc2626; margin-bottom: 1rem;">
                            "The viewer could not start"
                        </h1>
                        <ul style="
                            text-align: left;
                            background: #f3f4f6;
                            padding: 1rem 1rem 1rem 2rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                            font-family: monospace;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #3b82f6;
                                color: white;
                                border: none;
                                padding: 0.5rem 1.5rem;
                                border-radius: 4px;
                                cursor: pointer;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {loaded.map(|()| view! { <Shell /> })}
        </ErrorBoundary>
    }
}
