//! Open tabs and the active file.

use crate::tree::{FileNode, NodeId};

/// Open tabs in insertion order plus the active one.
///
/// Invariants:
/// - no two tabs share a file id
/// - `active`, when set, names an open tab
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabState {
    open: Vec<FileNode>,
    active: Option<NodeId>,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `file` (appending it if it is not open yet) and make it active.
    pub fn select_file(&mut self, file: FileNode) {
        let id = file.id;
        if !self.is_open(id) {
            self.open.push(file);
        }
        self.active = Some(id);
    }

    /// Activate an already open tab. Unknown ids are ignored.
    pub fn activate(&mut self, id: NodeId) {
        if self.is_open(id) {
            self.active = Some(id);
        }
    }

    /// Close the tab for `id`.
    ///
    /// Closing the active tab activates the last remaining tab, or nothing when
    /// none are left. Closing any other tab keeps the active one.
    pub fn close_tab(&mut self, id: NodeId) {
        let before = self.open.len();
        self.open.retain(|tab| tab.id != id);
        if self.open.len() == before {
            return;
        }
        if self.active == Some(id) {
            self.active = self.open.last().map(|tab| tab.id);
        }
    }

    pub fn tabs(&self) -> &[FileNode] {
        &self.open
    }

    pub fn active_id(&self) -> Option<NodeId> {
        self.active
    }

    pub fn active_file(&self) -> Option<&FileNode> {
        let id = self.active?;
        self.open.iter().find(|tab| tab.id == id)
    }

    pub fn is_open(&self, id: NodeId) -> bool {
        self.open.iter().any(|tab| tab.id == id)
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.active == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}
