//! Typed path parameter helpers.

use uuid::Uuid;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;

/// Path token addressing the root level in `/v1/folders/{id}/contents`.
pub const ROOT_TOKEN: &str = "root";

/// Parses a folder reference: `root` is the root level (`None`), anything
/// else must be a folder UUID. A malformed id cannot name any folder, so
/// it is reported as not found.
pub fn parse_folder_ref(s: &str) -> AppResult<Option<Uuid>> {
    if s == ROOT_TOKEN {
        return Ok(None);
    }
    Uuid::parse_str(s)
        .map(Some)
        .map_err(|_| AppError::not_found(format!("Folder {s} not found")))
}
