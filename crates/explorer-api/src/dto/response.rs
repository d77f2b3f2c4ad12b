//! Response DTOs.

use serde::{Deserialize, Serialize};

use explorer_entity::FolderNode;

/// `GET /v1/folders` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTreeData {
    /// Root-level tree nodes.
    pub folders: Vec<FolderNode>,
}

/// `GET /` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Active record store backend.
    pub store: String,
}
