//! Folder tree, folder contents, and folder lookups.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_database::store::FolderStore;
use explorer_entity::{Folder, FolderStats, FolderTree, FolderWithStats};

use super::tree::{build_tree, find_orphans};
use crate::failure::{CONTENTS_FAILED, FOLDER_FAILED, SEARCH_FAILED, TREE_FAILED, collapse};

/// Child folders of one folder, plus the folder itself.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderListing {
    /// Direct children with their counts, ordered by name.
    pub folders: Vec<FolderWithStats>,
    /// The listed folder; `None` for the root level.
    pub current_folder: Option<Folder>,
}

/// Read-only folder queries.
#[derive(Clone)]
pub struct FolderService {
    folders: Arc<dyn FolderStore>,
}

impl std::fmt::Debug for FolderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolderService").finish_non_exhaustive()
    }
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderStore>) -> Self {
        Self { folders }
    }

    /// Builds the full folder tree from every stored folder.
    pub async fn get_folder_tree(&self) -> AppResult<FolderTree> {
        let folders = self.folders.find_all().await.map_err(collapse(TREE_FAILED))?;

        let orphans = find_orphans(&folders);
        if !orphans.is_empty() {
            warn!(
                count = orphans.len(),
                ids = ?orphans.iter().map(|f| f.id).collect::<Vec<_>>(),
                "Folders with a missing parent left out of the tree"
            );
        }

        let tree = build_tree(&folders);
        debug!(total = tree.total_folders, roots = tree.roots.len(), "Built folder tree");
        Ok(tree)
    }

    /// Lists the direct children of `folder_id` (root level when `None`),
    /// each with its child and file counts.
    ///
    /// A count lookup that fails only affects that child, which is
    /// reported with zero counts.
    pub async fn get_folder_contents(&self, folder_id: Option<Uuid>) -> AppResult<FolderListing> {
        let (children, current_folder) = tokio::try_join!(
            self.folders.find_children(folder_id),
            self.current_folder(folder_id),
        )
        .map_err(collapse(CONTENTS_FAILED))?;

        let stats = join_all(children.iter().map(|child| self.folders.folder_stats(child.id))).await;

        let folders = children
            .into_iter()
            .zip(stats)
            .map(|(child, stats)| {
                let count = stats.unwrap_or_else(|e| {
                    warn!(folder_id = %child.id, error = %e, "Folder stats lookup failed");
                    FolderStats::default()
                });
                FolderWithStats::new(child, count)
            })
            .collect();

        Ok(FolderListing {
            folders,
            current_folder,
        })
    }

    async fn current_folder(&self, folder_id: Option<Uuid>) -> AppResult<Option<Folder>> {
        let Some(id) = folder_id else {
            return Ok(None);
        };
        self.folders
            .find_by_id(id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::not_found(format!("Folder {id} not found")))
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: Uuid) -> AppResult<Folder> {
        self.folders
            .find_by_id(folder_id)
            .await
            .map_err(collapse(FOLDER_FAILED))?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Resolves a path string to its folder.
    pub async fn find_by_path(&self, path: &str) -> AppResult<Folder> {
        self.folders
            .find_by_path(path)
            .await
            .map_err(collapse(FOLDER_FAILED))?
            .ok_or_else(|| AppError::not_found(format!("Folder '{path}' not found")))
    }

    /// Gets the chain of folders from the root down to `folder_id`.
    ///
    /// The walk stops at a missing parent or at a folder already visited,
    /// so broken or cyclic parent links never loop.
    pub async fn get_breadcrumbs(&self, folder_id: Uuid) -> AppResult<Vec<Folder>> {
        let mut trail = vec![self.get_folder(folder_id).await?];
        let mut visited = HashSet::from([folder_id]);

        while let Some(parent_id) = trail.last().and_then(|f| f.parent_id) {
            if !visited.insert(parent_id) {
                warn!(%folder_id, %parent_id, "Cycle in folder parent chain");
                break;
            }
            match self
                .folders
                .find_by_id(parent_id)
                .await
                .map_err(collapse(FOLDER_FAILED))?
            {
                Some(parent) => trail.push(parent),
                None => break,
            }
        }

        trail.reverse();
        Ok(trail)
    }

    /// Case-insensitive folder search over name and path.
    pub async fn search_folders(
        &self,
        query: &str,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Folder>> {
        self.folders
            .search(query, page)
            .await
            .map_err(collapse(SEARCH_FAILED))
    }
}
