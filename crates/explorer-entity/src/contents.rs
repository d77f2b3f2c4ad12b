//! Response shapes for folder listings and search.

use serde::{Deserialize, Serialize};

use explorer_core::types::pagination::Pagination;

use crate::file::File;
use crate::folder::{Folder, FolderWithStats};

/// The contents of one folder (or of the root when `current_folder` is
/// `None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderContents {
    /// Direct child folders with their counts, ordered by name.
    pub folders: Vec<FolderWithStats>,
    /// Files directly inside the folder, ordered by name.
    pub files: Vec<File>,
    pub current_folder: Option<Folder>,
}

/// Combined folder and file search results.
///
/// Folders and files are paged independently with the same page and
/// limit; `pagination.total` is the sum of both match counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
    pub pagination: Pagination,
}
