//! # explorer-entity
//!
//! Plain data records for the file explorer. `Folder` and `File` map
//! one-to-one onto store rows and derive `sqlx::FromRow`; `FolderNode`,
//! `FolderTree`, and `FolderWithStats` are transient, per-request shapes
//! that are never persisted.

pub mod contents;
pub mod file;
pub mod folder;
pub mod record;

pub use contents::{FolderContents, SearchResults};
pub use file::File;
pub use folder::{Folder, FolderNode, FolderStats, FolderTree, FolderWithStats};
pub use record::{Identified, same_identity, validate_record};
