//! PostgreSQL folder repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_entity::{Folder, FolderStats, validate_record};

use crate::store::{FolderStore, like_pattern};

// Names sort byte-wise (`COLLATE "C"`) so listings agree with the tree
// builder and the memory store whatever the database collation is.
const SEARCH_FOLDERS: &str = r#"SELECT * FROM folders
    WHERE name ILIKE $1 ESCAPE '\' OR path ILIKE $1 ESCAPE '\'
    ORDER BY name COLLATE "C" ASC, id ASC LIMIT $2 OFFSET $3"#;
const LIST_CHILDREN: &str = r#"SELECT * FROM folders WHERE parent_id IS NOT DISTINCT FROM $1
    ORDER BY name COLLATE "C" ASC, id ASC"#;
const LIST_ALL: &str = r#"SELECT * FROM folders ORDER BY name COLLATE "C" ASC, id ASC"#;

/// Repository for folder CRUD, listing and search queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether making `parent_id` the parent of `folder_id` would close a
    /// loop in the parent chain.
    async fn creates_cycle(&self, folder_id: Uuid, parent_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT id, parent_id FROM folders WHERE id = $1 \
                UNION \
                SELECT f.id, f.parent_id FROM folders f INNER JOIN ancestors a ON f.id = a.parent_id \
             ) SELECT EXISTS (SELECT 1 FROM ancestors WHERE id = $2)",
        )
        .bind(parent_id)
        .bind(folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check folder ancestry", e))
    }

    async fn count(&self, sql: &str, id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folder entries", e))?;
        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl Repository<Folder, Uuid> for FolderRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn save(&self, folder: &Folder) -> AppResult<Folder> {
        validate_record(folder)?;

        if let Some(parent_id) = folder.parent_id {
            if parent_id == folder.id || self.creates_cycle(folder.id, parent_id).await? {
                return Err(AppError::validation(format!(
                    "Folder {} cannot be placed under its own descendant",
                    folder.id
                )));
            }
        }

        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, name, parent_id, path, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                name = EXCLUDED.name, parent_id = EXCLUDED.parent_id, \
                path = EXCLUDED.path, updated_at = NOW() \
             RETURNING *",
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(folder.parent_id)
        .bind(&folder.path)
        .bind(folder.created_at)
        .bind(folder.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Folder path '{}' already exists", folder.path))
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!(
                    "Parent folder {} does not exist",
                    folder.parent_id.map(|id| id.to_string()).unwrap_or_default()
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save folder", e),
        })
    }

    /// Delete a folder (cascades to subfolders and their files).
    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete folder", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Searchable<Folder> for FolderRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Folder>> {
        let pattern = like_pattern(query);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM folders \
             WHERE name ILIKE $1 ESCAPE '\\' OR path ILIKE $1 ESCAPE '\\'",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folder matches", e))?;

        let folders = sqlx::query_as::<_, Folder>(SEARCH_FOLDERS)
            .bind(&pattern)
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search folders", e))?;

        Ok(PageResponse::new(folders, total.max(0) as u64))
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn find_by_path(&self, path: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE path = $1")
            .bind(path)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find folder by path", e)
            })
    }

    async fn find_children(&self, parent_id: Option<Uuid>) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(LIST_CHILDREN)
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(LIST_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn folder_stats(&self, id: Uuid) -> AppResult<FolderStats> {
        let (children, files) = tokio::try_join!(
            self.count("SELECT COUNT(*) FROM folders WHERE parent_id = $1", id),
            self.count("SELECT COUNT(*) FROM files WHERE folder_id = $1", id),
        )?;
        Ok(FolderStats { children, files })
    }
}
