//! File tree model and the path-to-tree builder.
//!
//! The builder turns a flat `path -> content` mapping into an ordered tree:
//! shared path prefixes collapse into one [`Folder`] per distinct prefix, leaf
//! segments become [`FileNode`]s, and every folder's children are ordered
//! folders first, then files, each group by [`compare_names`].
//!
//! # Path Convention
//!
//! - Segments are separated by `/`, no leading slash assumed
//! - `"a.ts"` is a root-level file
//! - `"src/b.js"` is file `b.js` inside folder `src`
//! - Empty segments (`"a//b"`, `"/a"`, `"a/"`) produce empty-named nodes

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Identity
// =============================================================================

/// Identity of a node, unique within one built tree.
///
/// Ids are assigned from 1 upward in first-seen order while the builder walks
/// the input, before sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Language & File Kind
// =============================================================================

/// Display language handed to the code view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
    Markdown,
}

impl Language {
    /// Derive the language from a file name.
    ///
    /// Matching is on the raw suffix, so `.TS` stays plain text.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(".ts") || name.ends_with(".tsx") {
            Some(Self::TypeScript)
        } else if name.ends_with(".js") {
            Some(Self::JavaScript)
        } else if name.ends_with(".md") {
            Some(Self::Markdown)
        } else {
            None
        }
    }

    /// Language tag understood by the code view (`typescript`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Markdown => "markdown",
        }
    }

    /// Human readable name for the status bar.
    pub fn display_name(language: Option<Self>) -> &'static str {
        match language {
            Some(Self::TypeScript) => "TypeScript",
            Some(Self::JavaScript) => "JavaScript",
            Some(Self::Markdown) => "Markdown",
            None => "Plain Text",
        }
    }
}

/// Extension family, used for icon colouring in the explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    TypeScript,
    JavaScript,
    Json,
    Markdown,
    Css,
    Html,
    Other,
}

impl FileKind {
    /// Detect the kind from the last extension, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
        match extension.as_deref() {
            Some("ts" | "tsx") => Self::TypeScript,
            Some("js" | "jsx") => Self::JavaScript,
            Some("json") => Self::Json,
            Some("md") => Self::Markdown,
            Some("css") => Self::Css,
            Some("html") => Self::Html,
            _ => Self::Other,
        }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// A leaf of the tree holding the full text of one input path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNode {
    pub id: NodeId,
    pub name: String,
    pub content: Arc<str>,
    pub language: Option<Language>,
}

impl FileNode {
    pub fn kind(&self) -> FileKind {
        FileKind::from_name(&self.name)
    }
}

/// A folder: one per distinct path prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Folder {
    pub id: NodeId,
    pub name: String,
    pub children: Vec<Node>,
}

/// Tree element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Folder(Folder),
    File(FileNode),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Folder(folder) => folder.id,
            Node::File(file) => file.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Children of a folder; files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => &folder.children,
            Node::File(_) => &[],
        }
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Punctuation and symbols in root collation order.
const SYMBOL_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary collation weight of one character.
///
/// Whitespace sorts before symbols, symbols before digits, digits before
/// letters. Letters ignore case at this level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Weight {
    Space(char),
    Symbol(usize),
    Digit(u32),
    Letter(char),
}

impl Weight {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            Self::Space(ch)
        } else if let Some(digit) = ch.to_digit(10) {
            Self::Digit(digit)
        } else if ch.is_alphanumeric() {
            Self::Letter(ch.to_lowercase().next().unwrap_or(ch))
        } else {
            let rank = SYMBOL_ORDER
                .chars()
                .position(|s| s == ch)
                .unwrap_or(SYMBOL_ORDER.len() + ch as usize);
            Self::Symbol(rank)
        }
    }
}

/// Name ordering used inside each group of siblings.
///
/// Follows the root collation order of browsers' `localeCompare`: names
/// compare by [`Weight`] first (`"index_test.ts" < "index.ts" < "Index2.ts"`),
/// and names that differ only in case put the lowercase form first
/// (`"readme" < "README" < "src"`).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(Weight::of)
        .cmp(b.chars().map(Weight::of))
        .then_with(|| b.cmp(a))
}

/// Full sibling ordering: folders before files, then [`compare_names`].
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}

/// Return a new tree with every level ordered by [`compare_nodes`].
pub fn sorted(nodes: Vec<Node>) -> Vec<Node> {
    let mut nodes: Vec<Node> = nodes
        .into_iter()
        .map(|node| match node {
            Node::Folder(folder) => Node::Folder(Folder {
                children: sorted(folder.children),
                ..folder
            }),
            file @ Node::File(_) => file,
        })
        .collect();
    nodes.sort_by(compare_nodes);
    nodes
}

// =============================================================================
// Builder
// =============================================================================

/// Why an input path did not produce a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// A node with the leaf name already exists at that position.
    Duplicate,
    /// A middle segment names a file that already exists.
    BlockedByFile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "a node with that name already exists"),
            Self::BlockedByFile => write!(f, "a parent segment is a file"),
        }
    }
}

/// An input path dropped by the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedPath {
    pub path: String,
    pub reason: SkipReason,
}

/// Result of [`build_tree`]: the sorted top-level nodes plus the paths that
/// lost to an earlier occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTree {
    pub nodes: Vec<Node>,
    pub skipped: Vec<SkippedPath>,
}

impl FileTree {
    /// Look up a node by following `/`-separated segments.
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut level = self.nodes.as_slice();
        let mut found = None;
        for part in path.split('/') {
            let node = level.iter().find(|n| n.name() == part)?;
            level = node.children();
            found = Some(node);
        }
        found
    }

    /// Look up a file by path.
    pub fn file(&self, path: &str) -> Option<&FileNode> {
        match self.get(path)? {
            Node::File(file) => Some(file),
            Node::Folder(_) => None,
        }
    }

    /// Total number of files in the tree.
    pub fn file_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::File(_) => 1,
                    Node::Folder(f) => count(&f.children),
                })
                .sum()
        }
        count(&self.nodes)
    }
}

/// Construction-time folder, discarded once sorting produces the final tree.
struct DraftFolder {
    id: NodeId,
    name: String,
    children: Vec<Draft>,
}

enum Draft {
    Folder(DraftFolder),
    File(FileNode),
}

impl Draft {
    fn name(&self) -> &str {
        match self {
            Draft::Folder(folder) => &folder.name,
            Draft::File(file) => &file.name,
        }
    }

    fn finish(self) -> Node {
        match self {
            Draft::Folder(folder) => Node::Folder(Folder {
                id: folder.id,
                name: folder.name,
                children: folder.children.into_iter().map(Draft::finish).collect(),
            }),
            Draft::File(file) => Node::File(file),
        }
    }
}

/// Build the ordered tree from `(path, content)` pairs.
///
/// Later occurrences of a position already taken are skipped and reported in
/// [`FileTree::skipped`]; the first write always wins.
pub fn build_tree<I, P, C>(files: I) -> FileTree
where
    I: IntoIterator<Item = (P, C)>,
    P: AsRef<str>,
    C: Into<Arc<str>>,
{
    let mut next_id = 1u32;
    let mut fresh_id = move || {
        let id = NodeId(next_id);
        next_id += 1;
        id
    };

    let mut root: Vec<Draft> = Vec::new();
    let mut skipped = Vec::new();

    'paths: for (path, content) in files {
        let path = path.as_ref();
        let parts: Vec<&str> = path.split('/').collect();
        let Some((leaf, dirs)) = parts.split_last() else {
            continue;
        };

        let mut current = &mut root;
        for part in dirs {
            let index = match current.iter().position(|d| d.name() == *part) {
                Some(index) => index,
                None => {
                    current.push(Draft::Folder(DraftFolder {
                        id: fresh_id(),
                        name: part.to_string(),
                        children: Vec::new(),
                    }));
                    current.len() - 1
                }
            };
            current = match &mut current[index] {
                Draft::Folder(folder) => &mut folder.children,
                Draft::File(_) => {
                    skipped.push(SkippedPath {
                        path: path.to_string(),
                        reason: SkipReason::BlockedByFile,
                    });
                    continue 'paths;
                }
            };
        }

        if current.iter().any(|d| d.name() == *leaf) {
            skipped.push(SkippedPath {
                path: path.to_string(),
                reason: SkipReason::Duplicate,
            });
            continue;
        }

        current.push(Draft::File(FileNode {
            id: fresh_id(),
            name: leaf.to_string(),
            content: content.into(),
            language: Language::from_name(leaf),
        }));
    }

    FileTree {
        nodes: sorted(root.into_iter().map(Draft::finish).collect()),
        skipped,
    }
}
