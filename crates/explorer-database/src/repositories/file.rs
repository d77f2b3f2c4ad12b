//! PostgreSQL file repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::traits::repository::{Repository, Searchable};
use explorer_core::types::pagination::{PageRequest, PageResponse};
use explorer_entity::{File, validate_record};

use crate::store::{FileStore, like_pattern};

// Byte-wise name order, matching the folder listings.
const SEARCH_FILES: &str = r#"SELECT * FROM files
    WHERE name ILIKE $1 ESCAPE '\' OR "type" ILIKE $1 ESCAPE '\'
    ORDER BY name COLLATE "C" ASC, id ASC LIMIT $2 OFFSET $3"#;
const LIST_BY_FOLDER: &str = r#"SELECT * FROM files WHERE folder_id = $1
    ORDER BY name COLLATE "C" ASC, id ASC"#;

/// Repository for file CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<File, Uuid> for FileRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn save(&self, file: &File) -> AppResult<File> {
        validate_record(file)?;

        sqlx::query_as::<_, File>(
            "INSERT INTO files (id, name, folder_id, size, \"type\", created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                name = EXCLUDED.name, folder_id = EXCLUDED.folder_id, size = EXCLUDED.size, \
                \"type\" = EXCLUDED.\"type\", updated_at = NOW() \
             RETURNING *",
        )
        .bind(file.id)
        .bind(&file.name)
        .bind(file.folder_id)
        .bind(file.size)
        .bind(&file.file_type)
        .bind(file.created_at)
        .bind(file.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!("Folder {} does not exist", file.folder_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save file", e),
        })
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Searchable<File> for FileRepository {
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<File>> {
        let pattern = like_pattern(query);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM files \
             WHERE name ILIKE $1 ESCAPE '\\' OR \"type\" ILIKE $1 ESCAPE '\\'",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count file matches", e))?;

        let files = sqlx::query_as::<_, File>(SEARCH_FILES)
            .bind(&pattern)
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))?;

        Ok(PageResponse::new(files, total.max(0) as u64))
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(LIST_BY_FOLDER)
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }
}
