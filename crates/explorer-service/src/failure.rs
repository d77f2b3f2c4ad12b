//! Mapping of store failures onto per-operation messages.

use tracing::error;

use explorer_core::error::AppError;

pub(crate) const TREE_FAILED: &str = "Failed to retrieve folder tree";
pub(crate) const CONTENTS_FAILED: &str = "Failed to retrieve folder contents";
pub(crate) const FOLDER_FAILED: &str = "Failed to retrieve folder";
pub(crate) const FILES_FAILED: &str = "Failed to retrieve files";
pub(crate) const SEARCH_FAILED: &str = "Search failed";

/// Log `err` and replace it with an internal error carrying `message`.
/// Not-found and validation errors are returned as they are.
pub(crate) fn collapse(message: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        if err.is_caller_facing() {
            return err;
        }
        error!(error = %err, operation = message, "Record store call failed");
        AppError::internal(message)
    }
}
