//! Status bar component.
//!
//! Shows facts about the active file and the current theme.

use codeview_core::{Language, TabState, line_count};
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Summary of the active tab, if any.
#[derive(Clone, PartialEq)]
struct ActiveSummary {
    name: String,
    lines: usize,
    language: &'static str,
}

/// Status bar component.
///
/// | Left | Right |
/// |------|-------|
/// | `index.tsx` | `12 lines · UTF-8 · TypeScript · Light` |
#[component]
pub fn Status(tabs: RwSignal<TabState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let active = Memo::new(move |_| {
        tabs.with(|t| {
            t.active_file().map(|file| ActiveSummary {
                name: file.name.clone(),
                lines: line_count(&file.content),
                language: Language::display_name(file.language),
            })
        })
    });

    view! {
        <footer class=css::bar>
            <div class=css::section>
                {move || match active.get() {
                    Some(summary) => summary.name,
                    None => "No file open".to_string(),
                }}
            </div>
            <div class=css::section>
                {move || active.get().map(|summary| view! {
                    <span class=css::item>{format!("{} lines", summary.lines)}</span>
                    <span class=css::item>"UTF-8"</span>
                    <span class=css::item>{summary.language}</span>
                })}
                <span class=css::item>{move || ctx.theme.get().label()}</span>
            </div>
        </footer>
    }
}
