//! Main explorer component.

use codeview_core::{ExplorerState, FileNode, NodeId};
use leptos::prelude::*;

use super::{SearchBox, TreeView};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer.
///
/// Clicking a folder toggles it; clicking a file hands it to `on_select` and
/// leaves expansion untouched.
#[component]
pub fn Explorer(#[prop(into)] on_select: Callback<FileNode>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(
        ctx.config
            .with_value(|c| ExplorerState::new(c.initial_expanded())),
    );

    let rows = Memo::new(move |_| {
        state.with(|s| ctx.tree.with_value(|tree| s.visible_rows(&tree.nodes)))
    });

    let search = Signal::derive(move || state.with(|s| s.search().to_string()));
    let on_search = Callback::new(move |text: String| state.update(|s| s.set_search(text)));
    let on_toggle = Callback::new(move |id: NodeId| state.update(|s| s.toggle_folder(id)));

    view! {
        <div class=css::explorer>
            <SearchBox value=search on_input=on_search />
            <Show
                when=move || rows.with(|r| !r.is_empty())
                fallback=|| view! { <p class=css::empty>"No matching files"</p> }
            >
                <TreeView rows=rows on_toggle=on_toggle on_select=on_select />
            </Show>
        </div>
    }
}
