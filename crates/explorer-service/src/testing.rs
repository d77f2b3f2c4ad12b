//! Store doubles shared by the service tests.

use async_trait::async_trait;
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_database::repositories::MemoryFolderRepository;
use explorer_database::store::{FileStore, FolderStore};
use explorer_database::MemoryStore;
use explorer_entity::{File, Folder, FolderStats};

/// Root `/`, Documents `/documents` and Work `/documents/work`.
pub(crate) async fn scenario() -> (MemoryStore, Folder, Folder, Folder) {
    let store = MemoryStore::new();
    let root = Folder::new("Root", None);
    let docs = Folder::new("Documents", Some(&root)).with_path("/documents");
    let work = Folder::new("Work", Some(&docs)).with_path("/documents/work");
    for folder in [&root, &docs, &work] {
        store.folders().save(folder).await.expect("save folder");
    }
    (store, root, docs, work)
}

fn outage() -> AppError {
    AppError::database("connection refused")
}

/// Delegates to a memory store but fails stats for one folder.
#[derive(Debug, Clone)]
pub(crate) struct FlakyStats {
    inner: MemoryFolderRepository,
    failing: Uuid,
}

impl FlakyStats {
    pub(crate) fn new(inner: MemoryFolderRepository, failing: Uuid) -> Self {
        Self { inner, failing }
    }
}

#[async_trait]
impl Repository<Folder, Uuid> for FlakyStats {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, folder: &Folder) -> AppResult<Folder> {
        self.inner.save(folder).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl Searchable<Folder> for FlakyStats {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Folder>> {
        self.inner.search(query, page).await
    }
}

#[async_trait]
impl FolderStore for FlakyStats {
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>> {
        self.inner.find_by_path(path).await
    }

    async fn find_children(&self, parent_id: Option<Uuid>) -> AppResult<Vec<Folder>> {
        self.inner.find_children(parent_id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        self.inner.find_all().await
    }

    async fn folder_stats(&self, id: Uuid) -> AppResult<FolderStats> {
        if id == self.failing {
            return Err(outage());
        }
        self.inner.folder_stats(id).await
    }
}

/// Folder store whose every call fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrokenFolders;

#[async_trait]
impl Repository<Folder, Uuid> for BrokenFolders {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Folder>> {
        Err(outage())
    }

    async fn save(&self, _folder: &Folder) -> AppResult<Folder> {
        Err(outage())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<bool> {
        Err(outage())
    }
}

#[async_trait]
impl Searchable<Folder> for BrokenFolders {
    async fn search(&self, _query: &str, _page: &PageRequest) -> AppResult<PageResponse<Folder>> {
        Err(outage())
    }
}

#[async_trait]
impl FolderStore for BrokenFolders {
    async fn find_by_path(&self, _path: &str) -> AppResult<Option<Folder>> {
        Err(outage())
    }

    async fn find_children(&self, _parent_id: Option<Uuid>) -> AppResult<Vec<Folder>> {
        Err(outage())
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Err(outage())
    }

    async fn folder_stats(&self, _id: Uuid) -> AppResult<FolderStats> {
        Err(outage())
    }
}

/// File store whose every call fails.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrokenFiles;

#[async_trait]
impl Repository<File, Uuid> for BrokenFiles {
    async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<File>> {
        Err(outage())
    }

    async fn save(&self, _file: &File) -> AppResult<File> {
        Err(outage())
    }

    async fn delete(&self, _id: Uuid) -> AppResult<bool> {
        Err(outage())
    }
}

#[async_trait]
impl Searchable<File> for BrokenFiles {
    async fn search(&self, _query: &str, _page: &PageRequest) -> AppResult<PageResponse<File>> {
        Err(outage())
    }
}

#[async_trait]
impl FileStore for BrokenFiles {
    async fn find_by_folder(&self, _folder_id: Uuid) -> AppResult<Vec<File>> {
        Err(outage())
    }
}
