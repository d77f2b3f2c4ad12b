//! Data transfer objects.

pub mod response;

pub use response::{BannerResponse, FolderTreeData, HealthResponse};
