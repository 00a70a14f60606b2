//! Main viewer component.

use codeview_core::{DisplayRequest, TabState};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{CodeView, TabBar};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

/// Tab bar plus the active file, or a placeholder when nothing is open.
#[component]
pub fn Viewer(tabs: RwSignal<TabState>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let request = Memo::new(move |_| {
        let theme = ctx.theme.get();
        ctx.config.with_value(|config| {
            tabs.with(|t| DisplayRequest::for_active(t, theme, config.read_only, &config.display))
        })
    });

    view! {
        <div class=css::viewer>
            <Show when=move || tabs.with(|t| !t.is_empty())>
                <TabBar tabs=tabs />
            </Show>
            <div class=css::body>
                {move || match request.get() {
                    Some(request) => view! { <CodeView request=request /> }.into_any(),
                    None => view! { <Placeholder /> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn Placeholder() -> impl IntoView {
    view! {
        <div class=css::placeholder>
            <span class=css::placeholderIcon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <p>"Select a file on the left to preview"</p>
        </div>
    }
}
