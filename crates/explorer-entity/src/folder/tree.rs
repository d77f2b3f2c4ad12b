//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Folder;
use crate::record::Identified;

/// A node in a folder tree: the folder's attributes, its children, and
/// a UI-only expand/collapse flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// The folder this node represents.
    #[serde(flatten)]
    pub folder: Folder,
    /// Whether the node is expanded in the client.
    #[serde(default)]
    pub is_open: bool,
    /// Child folder nodes, ordered by name.
    #[serde(default)]
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a collapsed node without children.
    pub fn new(folder: Folder) -> Self {
        Self {
            folder,
            is_open: false,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

impl Identified for FolderNode {
    fn id(&self) -> Uuid {
        self.folder.id
    }
}

/// A complete folder tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders placed in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Find a node anywhere in the tree.
    pub fn find(&self, id: Uuid) -> Option<&FolderNode> {
        find_node(&self.roots, id)
    }
}

/// Depth-first lookup of the node with `id`.
pub fn find_node(nodes: &[FolderNode], id: Uuid) -> Option<&FolderNode> {
    let mut stack: Vec<&FolderNode> = nodes.iter().collect();
    while let Some(node) = stack.pop() {
        if node.folder.id == id {
            return Some(node);
        }
        stack.extend(node.children.iter());
    }
    None
}

/// Flip `is_open` on the node with `id`, leaving every other node
/// untouched. Returns `false` when no node matches.
pub fn toggle_folder(nodes: &mut [FolderNode], id: Uuid) -> bool {
    let mut stack: Vec<&mut FolderNode> = nodes.iter_mut().collect();
    while let Some(node) = stack.pop() {
        if node.folder.id == id {
            node.is_open = !node.is_open;
            return true;
        }
        stack.extend(node.children.iter_mut());
    }
    false
}
