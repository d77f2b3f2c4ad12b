//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::record::Identified;

/// A file record. Files carry metadata only; content is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The file name (including extension).
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// The folder containing this file.
    pub folder_id: Uuid,
    /// File size in bytes.
    #[validate(range(min = 0))]
    pub size: i64,
    /// MIME type of the file.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub file_type: String,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Build a new file record inside `folder_id`.
    pub fn new(
        name: impl Into<String>,
        folder_id: Uuid,
        size: i64,
        file_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            folder_id,
            size,
            file_type: file_type.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

impl Identified for File {
    fn id(&self) -> Uuid {
        self.id
    }
}
