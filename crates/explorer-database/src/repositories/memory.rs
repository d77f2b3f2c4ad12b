//! In-memory record store using dashmap.
//!
//! Mirrors the PostgreSQL backend: parent references are checked on
//! save, folder paths are unique, and deleting a folder removes its
//! whole subtree together with the files inside it.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_entity::{File, Folder, FolderStats, validate_record};

use crate::store::{FileStore, FolderStore, Stores, contains_ignore_case};

#[derive(Debug, Default)]
struct MemoryState {
    folders: DashMap<Uuid, Folder>,
    files: DashMap<Uuid, File>,
}

/// Shared in-memory folder and file tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folder view over the shared tables.
    pub fn folders(&self) -> MemoryFolderRepository {
        MemoryFolderRepository {
            state: Arc::clone(&self.state),
        }
    }

    /// File view over the shared tables.
    pub fn files(&self) -> MemoryFileRepository {
        MemoryFileRepository {
            state: Arc::clone(&self.state),
        }
    }

    /// Both views, wired as trait objects.
    pub fn stores(&self) -> Stores {
        Stores::new(Arc::new(self.folders()), Arc::new(self.files()))
    }
}

/// Folder repository backed by [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryFolderRepository {
    state: Arc<MemoryState>,
}

/// File repository backed by [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct MemoryFileRepository {
    state: Arc<MemoryState>,
}

fn sort_by_name<T>(items: &mut [T], key: impl Fn(&T) -> (&str, Uuid)) {
    items.sort_by(|a, b| key(a).cmp(&key(b)));
}

impl MemoryFolderRepository {
    fn snapshot(&self) -> Vec<Folder> {
        self.state.folders.iter().map(|e| e.value().clone()).collect()
    }

    /// Walk up from `parent_id`; true when `folder_id` is reached.
    fn creates_cycle(&self, folder_id: Uuid, parent_id: Uuid) -> bool {
        let mut seen = HashSet::new();
        let mut cursor = Some(parent_id);
        while let Some(id) = cursor {
            if id == folder_id {
                return true;
            }
            if !seen.insert(id) {
                return false;
            }
            cursor = self.state.folders.get(&id).and_then(|f| f.parent_id);
        }
        false
    }

    /// Ids of `root` and every folder below it.
    fn subtree_ids(&self, root: Uuid) -> HashSet<Uuid> {
        let mut by_parent: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for entry in self.state.folders.iter() {
            if let Some(parent_id) = entry.parent_id {
                by_parent.entry(parent_id).or_default().push(entry.id);
            }
        }

        let mut ids = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if ids.insert(id) {
                if let Some(children) = by_parent.get(&id) {
                    stack.extend(children.iter().copied());
                }
            }
        }
        ids
    }
}

#[async_trait]
impl Repository<Folder, Uuid> for MemoryFolderRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        Ok(self.state.folders.get(&id).map(|f| f.value().clone()))
    }

    async fn save(&self, folder: &Folder) -> AppResult<Folder> {
        validate_record(folder)?;

        if let Some(parent_id) = folder.parent_id {
            if !self.state.folders.contains_key(&parent_id) {
                return Err(AppError::validation(format!(
                    "Parent folder {parent_id} does not exist"
                )));
            }
            if self.creates_cycle(folder.id, parent_id) {
                return Err(AppError::validation(format!(
                    "Folder {} cannot be placed under its own descendant",
                    folder.id
                )));
            }
        }

        let path_taken = self
            .state
            .folders
            .iter()
            .any(|e| e.path == folder.path && e.id != folder.id);
        if path_taken {
            return Err(AppError::conflict(format!(
                "Folder path '{}' already exists",
                folder.path
            )));
        }

        let mut saved = folder.clone();
        if let Some(existing) = self.state.folders.get(&folder.id) {
            saved.created_at = existing.created_at;
            saved.updated_at = chrono::Utc::now();
        }
        self.state.folders.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        if !self.state.folders.contains_key(&id) {
            return Ok(false);
        }

        let removed = self.subtree_ids(id);
        for folder_id in &removed {
            self.state.folders.remove(folder_id);
        }
        self.state
            .files
            .retain(|_, file| !removed.contains(&file.folder_id));

        debug!(folder_id = %id, removed = removed.len(), "Deleted folder subtree");
        Ok(true)
    }
}

#[async_trait]
impl Searchable<Folder> for MemoryFolderRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Folder>> {
        let needle = query.to_lowercase();
        let mut matches: Vec<Folder> = self
            .snapshot()
            .into_iter()
            .filter(|f| contains_ignore_case(&f.name, &needle) || contains_ignore_case(&f.path, &needle))
            .collect();
        sort_by_name(&mut matches, |f| (f.name.as_str(), f.id));

        let total = matches.len() as u64;
        Ok(PageResponse::new(page.slice(matches), total))
    }
}

#[async_trait]
impl FolderStore for MemoryFolderRepository {
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>> {
        Ok(self
            .state
            .folders
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.value().clone()))
    }

    async fn find_children(&self, parent_id: Option<Uuid>) -> AppResult<Vec<Folder>> {
        let mut children: Vec<Folder> = self
            .snapshot()
            .into_iter()
            .filter(|f| f.parent_id == parent_id)
            .collect();
        sort_by_name(&mut children, |f| (f.name.as_str(), f.id));
        Ok(children)
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let mut folders = self.snapshot();
        sort_by_name(&mut folders, |f| (f.name.as_str(), f.id));
        Ok(folders)
    }

    async fn folder_stats(&self, id: Uuid) -> AppResult<FolderStats> {
        let children = self
            .state
            .folders
            .iter()
            .filter(|e| e.parent_id == Some(id))
            .count() as u64;
        let files = self
            .state
            .files
            .iter()
            .filter(|e| e.folder_id == id)
            .count() as u64;
        Ok(FolderStats { children, files })
    }
}

impl MemoryFileRepository {
    fn snapshot(&self) -> Vec<File> {
        self.state.files.iter().map(|e| e.value().clone()).collect()
    }
}

#[async_trait]
impl Repository<File, Uuid> for MemoryFileRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        Ok(self.state.files.get(&id).map(|f| f.value().clone()))
    }

    async fn save(&self, file: &File) -> AppResult<File> {
        validate_record(file)?;

        if !self.state.folders.contains_key(&file.folder_id) {
            return Err(AppError::validation(format!(
                "Folder {} does not exist",
                file.folder_id
            )));
        }

        let mut saved = file.clone();
        if let Some(existing) = self.state.files.get(&file.id) {
            saved.created_at = existing.created_at;
            saved.updated_at = chrono::Utc::now();
        }
        self.state.files.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.state.files.remove(&id).is_some())
    }
}

#[async_trait]
impl Searchable<File> for MemoryFileRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<File>> {
        let needle = query.to_lowercase();
        let mut matches: Vec<File> = self
            .snapshot()
            .into_iter()
            .filter(|f| {
                contains_ignore_case(&f.name, &needle) || contains_ignore_case(&f.file_type, &needle)
            })
            .collect();
        sort_by_name(&mut matches, |f| (f.name.as_str(), f.id));

        let total = matches.len() as u64;
        Ok(PageResponse::new(page.slice(matches), total))
    }
}

#[async_trait]
impl FileStore for MemoryFileRepository {
    async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .snapshot()
            .into_iter()
            .filter(|f| f.folder_id == folder_id)
            .collect();
        sort_by_name(&mut files, |f| (f.name.as_str(), f.id));
        Ok(files)
    }
}
