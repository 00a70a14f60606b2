//! Main shell component.
//!
//! Owns the sidebar width and the open tabs, and wires the explorer's file
//! selection into the tab state.

use codeview_core::{FileNode, TabState, Theme};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::Divider;
use crate::app::AppContext;
use crate::components::explorer::Explorer;
use crate::components::icons as ic;
use crate::components::status::Status;
use crate::components::viewer::Viewer;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Shell component.
///
/// ## Layout
///
/// ```text
/// +-----------+-+--------------------------+
/// | header    |┊| tab bar                  |
/// | explorer  |┊| code view / placeholder  |
/// +-----------+-+--------------------------+
/// | status bar                             |
/// +----------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let sidebar = ctx.config.with_value(|c| c.sidebar.clone());
    let bounds = sidebar.bounds();
    let width = RwSignal::new(sidebar.default_width);
    let tabs = RwSignal::new(TabState::new());

    let on_select = Callback::new(move |file: FileNode| {
        tabs.update(|t| t.select_file(file));
    });

    let shell_class = move || match ctx.theme.get() {
        Theme::Dark => format!("{} {}", css::shell, css::themeDark),
        Theme::Light => format!("{} {}", css::shell, css::themeLight),
    };

    let sidebar_style = move || {
        format!(
            "width: {}px; min-width: {}px; max-width: {}px;",
            width.get(),
            bounds.min,
            bounds.max
        )
    };

    view! {
        <div class=shell_class>
            <div class=css::workbench>
                <aside class=css::sidebar style=sidebar_style>
                    <SidebarHeader />
                    <div class=css::sidebarBody>
                        <Explorer on_select=on_select />
                    </div>
                </aside>

                <Divider width=width bounds=bounds />

                <main class=css::main>
                    <Viewer tabs=tabs />
                </main>
            </div>

            <Status tabs=tabs />
        </div>
    }
}

/// Sidebar title and theme toggle.
#[component]
fn SidebarHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let toggle_title = Signal::derive(move || match ctx.theme.get() {
        Theme::Dark => "Switch to light theme",
        Theme::Light => "Switch to dark theme",
    });

    view! {
        <div class=css::sidebarHeader>
            <h2 class=css::title>{APP_NAME}</h2>
            <button
                class=css::themeButton
                on:click=move |_| ctx.toggle_theme()
                title=toggle_title
                aria-label=toggle_title
            >
                {move || match ctx.theme.get() {
                    Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                    Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                }}
            </button>
        </div>
    }
}
