//! Folder domain entities.

pub mod model;
pub mod stats;
pub mod tree;

pub use model::{Folder, ROOT_PATH, child_path};
pub use stats::{FolderStats, FolderWithStats};
pub use tree::{FolderNode, FolderTree, find_node, toggle_folder};
