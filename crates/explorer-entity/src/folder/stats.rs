//! Per-folder counts attached to folder listings.

use serde::{Deserialize, Serialize};

use super::model::Folder;

/// Direct child folder and file counts for one folder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStats {
    /// Number of direct subfolders.
    pub children: u64,
    /// Number of files directly inside the folder.
    pub files: u64,
}

/// A folder listed together with its counts, serialized as the folder's
/// attributes plus a `_count` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderWithStats {
    #[serde(flatten)]
    pub folder: Folder,
    #[serde(rename = "_count")]
    pub count: FolderStats,
}

impl FolderWithStats {
    pub fn new(folder: Folder, count: FolderStats) -> Self {
        Self { folder, count }
    }
}
