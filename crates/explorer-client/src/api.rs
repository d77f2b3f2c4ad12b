//! Explorer API abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use explorer_core::result::AppResult;
use explorer_entity::{FolderContents, FolderNode, SearchResults};

/// The three read operations of the explorer API.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Root-level folder tree nodes.
    async fn get_folder_tree(&self) -> AppResult<Vec<FolderNode>>;

    /// Contents of a folder, or of the root level for `None`.
    async fn get_folder_contents(&self, folder_id: Option<Uuid>) -> AppResult<FolderContents>;

    /// Combined folder and file search. `page` and `limit` use the
    /// server defaults when `None`.
    async fn search(
        &self,
        query: &str,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> AppResult<SearchResults>;
}
