//! Combined folder and file views served by the HTTP layer.

use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::pagination::{PageRequest, Pagination};
use explorer_database::store::Stores;
use explorer_entity::{File, FolderContents, FolderTree, SearchResults};

use crate::file::FileService;
use crate::folder::FolderService;

/// Composes the folder and file services into the three explorer views.
#[derive(Debug, Clone)]
pub struct ExplorerService {
    folders: FolderService,
    files: FileService,
}

impl ExplorerService {
    pub fn new(folders: FolderService, files: FileService) -> Self {
        Self { folders, files }
    }

    /// Wires both services onto one pair of stores.
    pub fn from_stores(stores: &Stores) -> Self {
        Self::new(
            FolderService::new(stores.folders.clone()),
            FileService::new(stores.files.clone()),
        )
    }

    pub fn folders(&self) -> &FolderService {
        &self.folders
    }

    pub fn files(&self) -> &FileService {
        &self.files
    }

    /// The full folder tree.
    pub async fn folder_tree(&self) -> AppResult<FolderTree> {
        self.folders.get_folder_tree().await
    }

    /// Child folders (with counts), files and the folder itself.
    ///
    /// The root level (`None`) has no files of its own.
    pub async fn folder_contents(&self, folder_id: Option<Uuid>) -> AppResult<FolderContents> {
        let (listing, files) = tokio::try_join!(
            self.folders.get_folder_contents(folder_id),
            self.files_in(folder_id),
        )?;

        Ok(FolderContents {
            folders: listing.folders,
            files,
            current_folder: listing.current_folder,
        })
    }

    async fn files_in(&self, folder_id: Option<Uuid>) -> AppResult<Vec<File>> {
        match folder_id {
            Some(id) => self.files.get_files_by_folder(id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Searches folders and files concurrently with the same page and
    /// limit.
    ///
    /// The reported total is the sum of both match counts, and
    /// `totalPages` is derived from that sum even though each list is
    /// paged on its own.
    pub async fn search(&self, query: &str, page: &PageRequest) -> AppResult<SearchResults> {
        if query.is_empty() {
            return Err(AppError::validation("Search query is required"));
        }

        let (folders, files) = tokio::try_join!(
            self.folders.search_folders(query, page),
            self.files.search_files(query, page),
        )?;

        let total = folders.total + files.total;
        Ok(SearchResults {
            folders: folders.items,
            files: files.items,
            pagination: Pagination::new(page, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use explorer_core::error::ErrorKind;
    use explorer_core::traits::repository::Repository;
    use explorer_database::MemoryStore;
    use explorer_entity::{File, Folder, FolderStats};

    use crate::testing::{BrokenFiles, scenario};

    const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    #[tokio::test]
    async fn test_root_contents_have_no_files() {
        let (store, root, _, _) = scenario().await;
        store
            .files()
            .save(&File::new("readme.txt", root.id, 1, "text/plain"))
            .await
            .expect("save");
        let service = ExplorerService::from_stores(&store.stores());

        let contents = service.folder_contents(None).await.expect("contents");
        assert!(contents.files.is_empty());
        assert!(contents.current_folder.is_none());
        assert_eq!(contents.folders[0].count, FolderStats { children: 1, files: 1 });
    }

    #[tokio::test]
    async fn test_folder_contents_include_files() {
        let (store, root, docs, _) = scenario().await;
        store
            .files()
            .save(&File::new("readme.txt", root.id, 1, "text/plain"))
            .await
            .expect("save");
        let service = ExplorerService::from_stores(&store.stores());

        let contents = service.folder_contents(Some(root.id)).await.expect("contents");
        assert_eq!(contents.files.len(), 1);
        assert_eq!(contents.folders[0].folder, docs);
        assert_eq!(contents.current_folder.map(|f| f.id), Some(root.id));
    }

    #[tokio::test]
    async fn test_search_sums_totals() {
        let (store, _, docs, _) = scenario().await;
        store
            .files()
            .save(&File::new("requirements.docx", docs.id, 1, DOCX))
            .await
            .expect("save");
        store
            .files()
            .save(&File::new("song.mp3", docs.id, 1, "audio/mpeg"))
            .await
            .expect("save");
        let service = ExplorerService::from_stores(&store.stores());

        let results = service.search("doc", &PageRequest::default()).await.expect("search");
        // Documents by name, Work by its /documents/work path.
        assert_eq!(results.folders.len(), 2);
        assert_eq!(results.files.len(), 1);
        assert_eq!(results.pagination.total, 3);
        assert_eq!(results.pagination.total_pages, 1);
    }

    #[tokio::test]
    async fn test_search_pagination_counts() {
        let store = MemoryStore::new();
        let root = Folder::new("Root", None);
        store.folders().save(&root).await.expect("save");
        for i in 0..7 {
            store
                .folders()
                .save(&Folder::new(format!("item-{i}"), Some(&root)))
                .await
                .expect("save");
            store
                .files()
                .save(&File::new(format!("item-{i}.txt"), root.id, 1, "text/plain"))
                .await
                .expect("save");
        }
        let service = ExplorerService::from_stores(&store.stores());

        let total = 7u64;
        let limit = 3u64;
        for page in 1..=4u64 {
            let request = PageRequest::new(page, limit).expect("page");
            let results = service.search("item", &request).await.expect("search");
            let expected = limit.min(total.saturating_sub((page - 1) * limit)) as usize;
            assert_eq!(results.folders.len(), expected);
            assert_eq!(results.files.len(), expected);
            assert_eq!(results.pagination.total, 14);
            assert_eq!(results.pagination.total_pages, 5);
        }
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let (store, _, _, _) = scenario().await;
        let service = ExplorerService::from_stores(&store.stores());

        let err = service
            .search("", &PageRequest::default())
            .await
            .expect_err("empty query");
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_file_store_failure_fails_search() {
        let (store, _, _, _) = scenario().await;
        let service = ExplorerService::new(
            FolderService::new(Arc::new(store.folders())),
            FileService::new(Arc::new(BrokenFiles)),
        );

        let err = service
            .search("doc", &PageRequest::default())
            .await
            .expect_err("search fails");
        assert_eq!(err.message, "Search failed");
    }

    #[tokio::test]
    async fn test_tree_and_contents_agree_on_sibling_order() {
        let (store, root, _, _) = scenario().await;
        for name in ["apple", "Banana", "_misc"] {
            store
                .folders()
                .save(&Folder::new(name, Some(&root)).with_path(format!("/{name}")))
                .await
                .expect("save");
        }
        let service = ExplorerService::from_stores(&store.stores());

        let tree = service.folder_tree().await.expect("tree");
        let tree_names: Vec<_> = tree.roots[0]
            .children
            .iter()
            .map(|n| n.folder.name.clone())
            .collect();
        let contents = service.folder_contents(Some(root.id)).await.expect("contents");
        let listed: Vec<_> = contents
            .folders
            .iter()
            .map(|f| f.folder.name.clone())
            .collect();

        assert_eq!(tree_names, listed);
        assert_eq!(listed, ["Banana", "Documents", "_misc", "apple"]);
    }
}
