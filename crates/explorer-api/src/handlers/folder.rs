//! Folder tree, folder contents and search handlers.

use axum::Json;
use axum::extract::{Path, State};

use explorer_core::types::response::ApiResponse;
use explorer_entity::{FolderContents, SearchResults};

use crate::dto::FolderTreeData;
use crate::error::ApiError;
use crate::extractors::{SearchQuery, parse_folder_ref};
use crate::state::AppState;

/// GET /v1/folders
pub async fn get_folder_tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FolderTreeData>>, ApiError> {
    let tree = state.explorer.folder_tree().await?;
    Ok(Json(ApiResponse::new(
        FolderTreeData {
            folders: tree.roots,
        },
        "Folder tree retrieved successfully",
    )))
}

/// GET /v1/folders/{id}/contents
pub async fn get_folder_contents(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let folder_id = parse_folder_ref(&id)?;
    let contents = state.explorer.folder_contents(folder_id).await?;
    Ok(Json(ApiResponse::new(
        contents,
        "Folder contents retrieved successfully",
    )))
}

/// GET /v1/folders/search?q=&page=&limit=
pub async fn search(
    State(state): State<AppState>,
    query: SearchQuery,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let results = state.explorer.search(&query.q, &query.page).await?;
    Ok(Json(ApiResponse::new(
        results,
        "Search completed successfully",
    )))
}
