//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::record::Identified;

/// Path of every root-level folder.
pub const ROOT_PATH: &str = "/";

/// A folder in the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// Full materialized path (e.g., `/documents/reports`).
    #[validate(length(min = 1))]
    pub path: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Build a new folder record under `parent`, deriving its path from
    /// the parent's path. A folder without a parent sits at [`ROOT_PATH`].
    pub fn new(name: impl Into<String>, parent: Option<&Folder>) -> Self {
        let name = name.into();
        let path = match parent {
            Some(parent) => child_path(&parent.path, &name),
            None => ROOT_PATH.to_string(),
        };
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name,
            parent_id: parent.map(|p| p.id),
            path,
            created_at: now,
            updated_at: now,
        }
    }

    /// Override the derived path (used when importing records whose path
    /// segments differ from their display names).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Number of path segments below the root (`/` is 0, `/a/b` is 2).
    pub fn depth(&self) -> usize {
        self.path.split('/').filter(|s| !s.is_empty()).count()
    }
}

impl Identified for Folder {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Join a parent path and a child segment with exactly one `/`.
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{}/{}", parent_path.trim_end_matches('/'), name.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::validate_record;

    #[test]
    fn test_root_folder_has_root_path() {
        let root = Folder::new("Root", None);
        assert!(root.is_root());
        assert_eq!(root.path, "/");
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_child_path_joins_ancestor_names() {
        let root = Folder::new("Root", None);
        let docs = Folder::new("Documents", Some(&root));
        let work = Folder::new("Work", Some(&docs));

        assert_eq!(docs.path, "/Documents");
        assert_eq!(work.path, "/Documents/Work");
        assert_eq!(work.parent_id, Some(docs.id));
        assert_eq!(work.depth(), 2);
    }

    #[test]
    fn test_name_length_is_validated() {
        let mut folder = Folder::new("ok", None);
        assert!(validate_record(&folder).is_ok());

        folder.name = String::new();
        assert!(validate_record(&folder).is_err());

        folder.name = "x".repeat(256);
        let err = validate_record(&folder).expect_err("too long");
        assert!(err.message.contains("name"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let folder = Folder::new("Root", None);
        let json = serde_json::to_value(&folder).expect("serialize");
        assert!(json.get("parentId").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json["parentId"].is_null());
    }
}
