//! Explorer state: folder expansion, search filter and the visible rows.

use std::collections::HashSet;

use crate::tree::{FileKind, FileNode, Folder, Node, NodeId};

/// What a rendered explorer row represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    Folder { expanded: bool },
    File { kind: FileKind, file: FileNode },
}

/// One line of the rendered explorer, already indented by `depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub id: NodeId,
    pub name: String,
    pub depth: usize,
    pub kind: RowKind,
}

impl TreeRow {
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, RowKind::Folder { .. })
    }
}

/// Expansion set and search string of the file explorer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExplorerState {
    expanded: HashSet<NodeId>,
    search: String,
}

impl ExplorerState {
    /// Create a state with the given folders expanded and an empty search.
    pub fn new(expanded: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            expanded: expanded.into_iter().collect(),
            search: String::new(),
        }
    }

    /// Flip `id` in the expanded set. Unknown ids are accepted and never shown.
    pub fn toggle_folder(&mut self, id: NodeId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Replace the search string.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Lowercased query, or `None` when the search is blank after trimming.
    ///
    /// Only the blank check trims; matching uses the string as typed.
    pub fn query(&self) -> Option<String> {
        if self.search.trim().is_empty() {
            None
        } else {
            Some(self.search.to_lowercase())
        }
    }

    /// The tree as the explorer shows it: pruned by the search, if any.
    pub fn filtered(&self, nodes: &[Node]) -> Vec<Node> {
        match self.query() {
            Some(query) => filter_nodes(nodes, &query),
            None => nodes.to_vec(),
        }
    }

    /// Flatten the filtered tree into rows, skipping collapsed subtrees.
    pub fn visible_rows(&self, nodes: &[Node]) -> Vec<TreeRow> {
        let filtered = self.filtered(nodes);
        let mut rows = Vec::new();
        self.push_rows(&filtered, 0, &mut rows);
        rows
    }

    fn push_rows(&self, nodes: &[Node], depth: usize, rows: &mut Vec<TreeRow>) {
        for node in nodes {
            match node {
                Node::Folder(folder) => {
                    let expanded = self.is_expanded(folder.id);
                    rows.push(TreeRow {
                        id: folder.id,
                        name: folder.name.clone(),
                        depth,
                        kind: RowKind::Folder { expanded },
                    });
                    if expanded {
                        self.push_rows(&folder.children, depth + 1, rows);
                    }
                }
                Node::File(file) => rows.push(TreeRow {
                    id: file.id,
                    name: file.name.clone(),
                    depth,
                    kind: RowKind::File {
                        kind: file.kind(),
                        file: file.clone(),
                    },
                }),
            }
        }
    }
}

/// Case-insensitive match of an already lowercased `query` against a file's
/// name or content.
pub fn file_matches(file: &FileNode, query: &str) -> bool {
    file.name.to_lowercase().contains(query) || file.content.to_lowercase().contains(query)
}

/// Keep matching files and the folders that lead to them.
pub fn filter_nodes(nodes: &[Node], query: &str) -> Vec<Node> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Folder(folder) => {
                let children = filter_nodes(&folder.children, query);
                (!children.is_empty()).then(|| {
                    Node::Folder(Folder {
                        id: folder.id,
                        name: folder.name.clone(),
                        children,
                    })
                })
            }
            Node::File(file) => file_matches(file, query).then(|| node.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn sample() -> Vec<Node> {
        build_tree([("a.ts", "x"), ("src/b.js", "y"), ("src/c.md", "z")]).nodes
    }

    fn row_names(rows: &[TreeRow]) -> Vec<(&str, usize)> {
        rows.iter().map(|r| (r.name.as_str(), r.depth)).collect()
    }

    // =========================================================================
    // Expansion Tests
    // =========================================================================

    #[test]
    fn test_toggle_folder() {
        let mut state = ExplorerState::default();
        state.toggle_folder(NodeId(2));
        assert!(state.is_expanded(NodeId(2)));
        state.toggle_folder(NodeId(2));
        assert!(!state.is_expanded(NodeId(2)));
    }

    #[test]
    fn test_toggle_unknown_id_is_harmless() {
        let nodes = sample();
        let mut state = ExplorerState::default();
        let before = state.visible_rows(&nodes);
        state.toggle_folder(NodeId(999));
        assert_eq!(state.visible_rows(&nodes), before);
    }

    #[test]
    fn test_collapsed_children_are_not_rendered() {
        let nodes = sample();
        let src = nodes[0].id();

        let state = ExplorerState::default();
        assert_eq!(row_names(&state.visible_rows(&nodes)), vec![("src", 0), ("a.ts", 0)]);

        let state = ExplorerState::new([src]);
        assert_eq!(
            row_names(&state.visible_rows(&nodes)),
            vec![("src", 0), ("b.js", 1), ("c.md", 1), ("a.ts", 0)]
        );
        assert_eq!(state.visible_rows(&nodes)[0].kind, RowKind::Folder { expanded: true });
    }

    // =========================================================================
    // Search Tests
    // =========================================================================

    #[test]
    fn test_search_prunes_tree() {
        let nodes = sample();
        let mut state = ExplorerState::default();
        state.set_search("y");

        let filtered = state.filtered(&nodes);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "src");
        assert_eq!(filtered[0].children().len(), 1);
        assert_eq!(filtered[0].children()[0].name(), "b.js");
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let nodes = sample();
        let mut state = ExplorerState::default();
        state.set_search("C.MD");

        let filtered = state.filtered(&nodes);
        assert_eq!(filtered[0].children()[0].name(), "c.md");
    }

    #[test]
    fn test_blank_search_shows_everything() {
        let nodes = sample();
        let mut state = ExplorerState::default();
        state.set_search("   ");
        assert_eq!(state.query(), None);
        assert_eq!(state.filtered(&nodes), nodes);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        let nodes = sample();
        let mut state = ExplorerState::default();
        state.set_search("nothing here");
        assert!(state.visible_rows(&nodes).is_empty());
    }

    #[test]
    fn test_collapse_keeps_filter() {
        let nodes = sample();
        let src = nodes[0].id();
        let mut state = ExplorerState::new([src]);
        state.set_search("z");

        assert_eq!(row_names(&state.visible_rows(&nodes)), vec![("src", 0), ("c.md", 1)]);
        state.toggle_folder(src);
        assert_eq!(row_names(&state.visible_rows(&nodes)), vec![("src", 0)]);
        state.toggle_folder(src);
        assert_eq!(row_names(&state.visible_rows(&nodes)), vec![("src", 0), ("c.md", 1)]);
    }
}
