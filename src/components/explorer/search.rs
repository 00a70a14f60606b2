//! Search input for the explorer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Filter box matching file names and content.
#[component]
pub fn SearchBox(value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    view! {
        <div class=css::search>
            <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
            <input
                type="text"
                class=css::searchInput
                placeholder="Search files or content..."
                aria-label="Search files or content"
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
