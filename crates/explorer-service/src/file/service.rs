//! File listing and search.

use std::sync::Arc;

use uuid::Uuid;

use explorer_core::result::AppResult;
use explorer_core::traits::repository::Searchable;
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_database::store::FileStore;
use explorer_entity::File;

use crate::failure::{FILES_FAILED, SEARCH_FAILED, collapse};

/// Read-only file queries.
#[derive(Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService").finish_non_exhaustive()
    }
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    /// Lists the files directly inside a folder, ordered by name.
    pub async fn get_files_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<File>> {
        self.files
            .find_by_folder(folder_id)
            .await
            .map_err(collapse(FILES_FAILED))
    }

    /// Case-insensitive file search over name and type.
    pub async fn search_files(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<File>> {
        self.files
            .search(query, page)
            .await
            .map_err(collapse(SEARCH_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_core::error::ErrorKind;
    use explorer_core::traits::repository::Repository;

    use crate::testing::{BrokenFiles, scenario};

    #[tokio::test]
    async fn test_files_by_folder_sorted() {
        let (store, _, docs, work) = scenario().await;
        for name in ["notes.txt", "agenda.txt"] {
            store
                .files()
                .save(&File::new(name, docs.id, 10, "text/plain"))
                .await
                .expect("save");
        }
        store
            .files()
            .save(&File::new("budget.xlsx", work.id, 10, "application/vnd.ms-excel"))
            .await
            .expect("save");

        let service = FileService::new(Arc::new(store.files()));
        let files = service.get_files_by_folder(docs.id).await.expect("files");
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["agenda.txt", "notes.txt"]);
    }

    #[tokio::test]
    async fn test_search_matches_type() {
        let (store, _, docs, _) = scenario().await;
        store
            .files()
            .save(&File::new(
                "requirements.docx",
                docs.id,
                1,
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ))
            .await
            .expect("save");
        store
            .files()
            .save(&File::new("cat.png", docs.id, 1, "image/png"))
            .await
            .expect("save");

        let service = FileService::new(Arc::new(store.files()));
        let page = service
            .search_files("WORDPROCESSING", &PageRequest::default())
            .await
            .expect("search");
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "requirements.docx");
    }

    #[tokio::test]
    async fn test_store_failure_collapses() {
        let service = FileService::new(Arc::new(BrokenFiles));

        let err = service
            .get_files_by_folder(Uuid::new_v4())
            .await
            .expect_err("fails");
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.message, "Failed to retrieve files");
    }
}
