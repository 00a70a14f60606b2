//! Whole-tree properties checked over generated inputs.

use std::cmp::Ordering;

use codeview_core::tree::{compare_names, sorted};
use codeview_core::{
    DragAnchor, ExplorerState, FileMap, FileNode, Node, NodeId, SidebarBounds, SkipReason,
    TabState, build_tree,
};
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};

// =============================================================================
// Input Generation
// =============================================================================

const DIRS: &[&str] = &["src", "lib", "Docs", "tests", "a", "a_b", "a-b"];
const FILES: &[&str] = &[
    "main.ts",
    "App.tsx",
    "util.js",
    "README.md",
    "readme.md",
    "b.json",
    "Zed.ts",
    "index_test.ts",
    "index.ts",
];
const WORDS: &[&str] = &["alpha", "Beta", "gamma", "TODO", "fn main()", ""];

fn pick(g: &mut Gen, items: &[&'static str]) -> &'static str {
    g.choose(items).copied().unwrap_or_default()
}

/// `(path, content)` pairs in input order, duplicates allowed.
///
/// Directory and file names never overlap, so the only conflicts are
/// repeated paths.
#[derive(Clone, Debug)]
struct PathMap(Vec<(String, String)>);

impl Arbitrary for PathMap {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 30;
        let entries = (0..count)
            .map(|_| {
                let depth = usize::arbitrary(g) % 4;
                let mut parts: Vec<&str> = (0..depth).map(|_| pick(g, DIRS)).collect();
                parts.push(pick(g, FILES));
                let content = format!("{} {}", pick(g, WORDS), pick(g, WORDS));
                (parts.join("/"), content)
            })
            .collect();
        PathMap(entries)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let entries = self.0.clone();
        Box::new((0..entries.len()).map(move |i| {
            let mut fewer = entries.clone();
            fewer.remove(i);
            PathMap(fewer)
        }))
    }
}

/// Search text: usually a word that occurs in the inputs, sometimes noise.
#[derive(Clone, Debug)]
struct Query(String);

impl Arbitrary for Query {
    fn arbitrary(g: &mut Gen) -> Self {
        let text = match u8::arbitrary(g) % 4 {
            0 => String::arbitrary(g),
            1 => pick(g, FILES).to_uppercase(),
            _ => format!(" {} ", pick(g, &["ALPHA", "ts", "main", "zzz", "e", "_"])),
        };
        Query(text)
    }
}

#[derive(Clone, Copy, Debug)]
enum TabOp {
    Select(usize),
    Activate(usize),
    Close(usize),
}

impl Arbitrary for TabOp {
    fn arbitrary(g: &mut Gen) -> Self {
        let index = usize::arbitrary(g);
        match u8::arbitrary(g) % 3 {
            0 => TabOp::Activate(index),
            1 => TabOp::Close(index),
            _ => TabOp::Select(index),
        }
    }
}

fn walk<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
    for node in nodes {
        out.push(node);
        walk(node.children(), out);
    }
}

fn all_nodes(nodes: &[Node]) -> Vec<&Node> {
    let mut out = Vec::new();
    walk(nodes, &mut out);
    out
}

fn all_files(nodes: &[Node]) -> Vec<FileNode> {
    all_nodes(nodes)
        .into_iter()
        .filter_map(|n| match n {
            Node::File(f) => Some(f.clone()),
            Node::Folder(_) => None,
        })
        .collect()
}

fn level_ordered(nodes: &[Node]) -> bool {
    let first_file = nodes.iter().position(|n| !n.is_folder()).unwrap_or(nodes.len());
    let grouped = nodes[first_file..].iter().all(|n| !n.is_folder());
    let named = [&nodes[..first_file], &nodes[first_file..]]
        .into_iter()
        .all(|group| {
            group
                .windows(2)
                .all(|pair| compare_names(pair[0].name(), pair[1].name()) != Ordering::Greater)
        });
    grouped && named && nodes.iter().all(|n| level_ordered(n.children()))
}

fn unique(mut ids: Vec<NodeId>) -> bool {
    let total = ids.len();
    ids.sort();
    ids.dedup();
    ids.len() == total
}

// =============================================================================
// Tree Builder
// =============================================================================

quickcheck! {
    fn test_sort_is_idempotent(input: PathMap) -> bool {
        let tree = build_tree(input.0);
        sorted(tree.nodes.clone()) == tree.nodes
    }

    fn test_folders_first_then_names(input: PathMap) -> bool {
        level_ordered(&build_tree(input.0).nodes)
    }

    fn test_every_path_is_reachable_first_write_wins(input: PathMap) -> bool {
        let tree = build_tree(input.0.clone());

        let mut seen: Vec<&str> = Vec::new();
        input.0.iter().all(|(path, content)| {
            if seen.contains(&path.as_str()) {
                return tree
                    .skipped
                    .iter()
                    .any(|s| s.path == *path && s.reason == SkipReason::Duplicate);
            }
            seen.push(path);
            tree.file(path).is_some_and(|file| &*file.content == content.as_str())
        })
    }

    fn test_ids_are_unique(input: PathMap) -> bool {
        let tree = build_tree(input.0);
        unique(all_nodes(&tree.nodes).iter().map(|n| n.id()).collect())
    }

    fn test_output_independent_of_input_order(input: PathMap) -> bool {
        let map: FileMap = input.0.into_iter().collect();
        let forward = build_tree(map.clone());
        let reversed = build_tree(map.into_iter().rev());

        fn shape(nodes: &[Node]) -> Vec<(String, Vec<String>)> {
            all_nodes(nodes)
                .into_iter()
                .map(|n| {
                    let children = n.children().iter().map(|c| c.name().to_string()).collect();
                    (n.name().to_string(), children)
                })
                .collect()
        }
        shape(&forward.nodes) == shape(&reversed.nodes)
    }
}

// =============================================================================
// Explorer
// =============================================================================

quickcheck! {
    fn test_filter_soundness(input: PathMap, query: Query) -> TestResult {
        let mut explorer = ExplorerState::default();
        explorer.set_search(query.0.clone());
        let Some(needle) = explorer.query() else {
            return TestResult::discard();
        };

        let tree = build_tree(input.0);
        let sound = all_nodes(&explorer.filtered(&tree.nodes)).into_iter().all(|node| match node {
            Node::File(file) => {
                file.name.to_lowercase().contains(&needle)
                    || file.content.to_lowercase().contains(&needle)
            }
            Node::Folder(folder) => !all_files(&folder.children).is_empty(),
        });
        TestResult::from_bool(sound)
    }
}

// =============================================================================
// Tabs
// =============================================================================

quickcheck! {
    fn test_tab_uniqueness_and_active_after_close(input: PathMap, ops: Vec<TabOp>) -> TestResult {
        let files = all_files(&build_tree(input.0).nodes);
        if files.is_empty() {
            return TestResult::discard();
        }

        let mut tabs = TabState::new();
        for op in ops {
            match op {
                TabOp::Select(i) => {
                    let file = files[i % files.len()].clone();
                    let id = file.id;
                    tabs.select_file(file);
                    if !tabs.is_active(id) {
                        return TestResult::failed();
                    }
                }
                TabOp::Activate(i) => {
                    let id = files[i % files.len()].id;
                    let before = tabs.active_id();
                    tabs.activate(id);
                    let expected = if tabs.is_open(id) { Some(id) } else { before };
                    if tabs.active_id() != expected {
                        return TestResult::failed();
                    }
                }
                TabOp::Close(i) => {
                    let id = files[i % files.len()].id;
                    let was_active = tabs.is_active(id);
                    let active_before = tabs.active_id();
                    tabs.close_tab(id);
                    let expected = if was_active {
                        tabs.tabs().last().map(|t| t.id)
                    } else {
                        active_before
                    };
                    if tabs.active_id() != expected {
                        return TestResult::failed();
                    }
                }
            }
            if !unique(tabs.tabs().iter().map(|t| t.id).collect()) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }
}

// =============================================================================
// Layout
// =============================================================================

quickcheck! {
    fn test_width_stays_in_bounds(start_x: u16, start_width: u16, client_x: i16) -> bool {
        let bounds = SidebarBounds {
            min: 200.0,
            max: 600.0,
        };
        let anchor = DragAnchor::new(f64::from(start_x), bounds.clamp(f64::from(start_width)));
        let width = anchor.width_at(f64::from(client_x), bounds);
        (bounds.min..=bounds.max).contains(&width)
    }
}
