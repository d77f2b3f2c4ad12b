//! Store traits consumed by the query services.
//!
//! Both backends (PostgreSQL and in-memory) implement these, and services
//! only ever see them as trait objects.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_entity::{File, Folder, FolderStats};

/// Folder record store.
///
/// `search` matches the query against the folder name or path.
#[async_trait]
pub trait FolderStore: Repository<Folder, Uuid> + Searchable<Folder> {
    /// Find the folder with exactly this path.
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>>;

    /// List the direct children of `parent_id` (root-level folders when
    /// `None`), ordered by name.
    async fn find_children(&self, parent_id: Option<Uuid>) -> AppResult<Vec<Folder>>;

    /// List every folder, ordered by name.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// Count the direct subfolders and direct files of a folder.
    async fn folder_stats(&self, id: Uuid) -> AppResult<FolderStats>;
}

/// File record store.
///
/// `search` matches the query against the file name or type.
#[async_trait]
pub trait FileStore: Repository<File, Uuid> + Searchable<File> {
    /// List the files directly inside a folder, ordered by name.
    async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<File>>;
}

/// The pair of stores a running explorer is wired with.
#[derive(Clone)]
pub struct Stores {
    pub folders: Arc<dyn FolderStore>,
    pub files: Arc<dyn FileStore>,
}

impl Stores {
    pub fn new(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self { folders, files }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores").finish_non_exhaustive()
    }
}

/// Build a `LIKE` pattern matching `query` as a literal substring.
///
/// `%`, `_` and `\` in the query are escaped so they never act as
/// wildcards.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive substring test matching `ILIKE` semantics for
/// literal patterns.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("doc"), "%doc%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Documents", "doc"));
        assert!(contains_ignore_case("/documents/work", "work"));
        assert!(!contains_ignore_case("Music", "doc"));
    }
}
