//! Tab bar for open files.

use codeview_core::{NodeId, TabState};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/viewer/viewer.module.css");

#[component]
pub fn TabBar(tabs: RwSignal<TabState>) -> impl IntoView {
    let entries = move || {
        tabs.with(|t| {
            t.tabs()
                .iter()
                .map(|file| (file.id, file.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=css::tabBar role="tablist">
            <For
                each=entries
                key=|(id, _)| *id
                children=move |(id, name)| view! { <Tab id=id name=name tabs=tabs /> }
            />
        </div>
    }
}

#[component]
fn Tab(id: NodeId, name: String, tabs: RwSignal<TabState>) -> impl IntoView {
    let active = Memo::new(move |_| tabs.with(|t| t.is_active(id)));
    let class = move || {
        if active.get() {
            format!("{} {}", css::tab, css::tabActive)
        } else {
            css::tab.to_string()
        }
    };
    let title = name.clone();
    let close_title = format!("Close {}", name);
    let close_label = close_title.clone();

    view! {
        <div
            class=class
            role="tab"
            aria-selected=move || active.get().to_string()
            title=title
            on:click=move |_| tabs.update(|t| t.activate(id))
        >
            <span class=css::tabIcon aria-hidden="true"><Icon icon=ic::FILE_TEXT /></span>
            <span class=css::tabName>{name}</span>
            <button
                class=css::tabClose
                title=close_title
                aria-label=close_label
                on:click=move |ev| {
                    ev.stop_propagation();
                    tabs.update(|t| t.close_tab(id));
                }
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use codeview_core::build_tree;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_tabs_show_icon_and_title() {
        let tree = build_tree([("a.ts", "x"), ("notes.md", "y")]);
        let tabs = RwSignal::new(TabState::new());
        tabs.update(|t| {
            t.select_file(tree.file("a.ts").unwrap().clone());
            t.select_file(tree.file("notes.md").unwrap().clone());
        });

        let root: web_sys::HtmlElement = document().create_element("div").unwrap().unchecked_into();
        document().body().unwrap().append_child(&root).unwrap();
        let _mounted = mount_to(root.clone(), move || view! { <TabBar tabs=tabs /> });

        let rendered = root.query_selector_all("[role=tab]").unwrap();
        assert_eq!(rendered.length(), 2);

        let first: Element = rendered.item(0).unwrap().unchecked_into();
        assert_eq!(first.get_attribute("title").as_deref(), Some("a.ts"));
        assert_eq!(first.get_attribute("aria-selected").as_deref(), Some("false"));
        // file icon plus close icon
        assert_eq!(first.query_selector_all("svg").unwrap().length(), 2);

        let second: Element = rendered.item(1).unwrap().unchecked_into();
        assert_eq!(second.get_attribute("aria-selected").as_deref(), Some("true"));
    }
}
