//! Tree rows for the explorer.
//!
//! The visible tree arrives already flattened; each row carries its depth, so
//! rendering is a flat keyed list with indentation.

use codeview_core::{FileKind, FileNode, NodeId, RowKind, TreeRow};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{TREE_BASE_PADDING_PX, TREE_INDENT_PX};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Icon colour class for a file kind.
fn kind_class(kind: FileKind) -> &'static str {
    match kind {
        FileKind::TypeScript => css::kindTs,
        FileKind::JavaScript => css::kindJs,
        FileKind::Json => css::kindJson,
        FileKind::Markdown => css::kindMd,
        FileKind::Css => css::kindCss,
        FileKind::Html => css::kindHtml,
        FileKind::Other => css::kindOther,
    }
}

/// Rows change identity when a folder flips, so they re-render.
fn row_key(row: &TreeRow) -> (NodeId, usize, bool) {
    let expanded = matches!(row.kind, RowKind::Folder { expanded: true });
    (row.id, row.depth, expanded)
}

#[component]
pub fn TreeView(
    rows: Memo<Vec<TreeRow>>,
    on_toggle: Callback<NodeId>,
    on_select: Callback<FileNode>,
) -> impl IntoView {
    view! {
        <div class=css::tree role="tree" aria-label="Files">
            <For
                each=move || rows.get()
                key=row_key
                children=move |row| {
                    view! { <TreeRowItem row=row on_toggle=on_toggle on_select=on_select /> }
                }
            />
        </div>
    }
}

#[component]
fn TreeRowItem(
    row: TreeRow,
    on_toggle: Callback<NodeId>,
    on_select: Callback<FileNode>,
) -> impl IntoView {
    let padding = format!(
        "padding-left: {}px;",
        TREE_BASE_PADDING_PX + row.depth * TREE_INDENT_PX
    );
    let TreeRow { id, name, kind, .. } = row;
    let title = name.clone();

    match kind {
        RowKind::Folder { expanded } => {
            let chevron = if expanded { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
            let folder = if expanded { ic::FOLDER_OPEN } else { ic::FOLDER };
            view! {
                <div
                    class=css::row
                    style=padding
                    on:click=move |_| on_toggle.run(id)
                    role="treeitem"
                    aria-expanded=expanded.to_string()
                    title=title
                >
                    <span class=css::chevron aria-hidden="true"><Icon icon=chevron /></span>
                    <span class=css::folderIcon aria-hidden="true"><Icon icon=folder /></span>
                    <span class=css::name>{name}</span>
                </div>
            }
            .into_any()
        }
        RowKind::File { kind, file } => {
            let icon_class = format!("{} {}", css::fileIcon, kind_class(kind));
            view! {
                <div
                    class=css::row
                    style=padding
                    on:click=move |_| on_select.run(file.clone())
                    role="treeitem"
                    title=title
                >
                    <span class=css::chevronSpacer></span>
                    <span class=icon_class aria-hidden="true"><Icon icon=ic::FILE_TEXT /></span>
                    <span class=css::name>{name}</span>
                </div>
            }
            .into_any()
        }
    }
}
