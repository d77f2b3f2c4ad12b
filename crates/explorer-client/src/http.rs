//! `reqwest` implementation of [`ExplorerApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::response::{ApiErrorResponse, ApiResponse};
use explorer_entity::{FolderContents, FolderNode, SearchResults};

use crate::api::ExplorerApi;

#[derive(Deserialize)]
struct TreeData {
    folders: Vec<FolderNode>,
}

/// HTTP client for a running explorer server.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    base_url: Url,
    client: Client,
}

impl ExplorerClient {
    /// Create a client for the server at `base_url` (e.g.
    /// `http://localhost:3001`).
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to build HTTP client", e)
            })?;
        Self::with_client(base_url, client)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> AppResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("Invalid API base URL '{base_url}': {e}")))?;
        // `join` replaces the last segment unless the path ends in `/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> AppResult<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| AppError::internal(format!("Invalid API path '{path}': {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn get_data<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::with_source(ErrorKind::ExternalService, "Explorer API request failed", e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorResponse>().await {
                Ok(body) => body.message,
                Err(_) => format!("Explorer API returned {status}"),
            };
            return Err(error_for_status(status, message));
        }

        let envelope: ApiResponse<T> = response.json().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Malformed explorer API response", e)
        })?;
        Ok(envelope.data)
    }
}

fn error_for_status(status: StatusCode, message: String) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(message),
        _ => AppError::external(message),
    }
}

#[async_trait]
impl ExplorerApi for ExplorerClient {
    async fn get_folder_tree(&self) -> AppResult<Vec<FolderNode>> {
        let data: TreeData = self.get_data(self.url("v1/folders", &[])?).await?;
        Ok(data.folders)
    }

    async fn get_folder_contents(&self, folder_id: Option<Uuid>) -> AppResult<FolderContents> {
        let id = folder_id.map_or_else(|| "root".to_string(), |id| id.to_string());
        self.get_data(self.url(&format!("v1/folders/{id}/contents"), &[])?)
            .await
    }

    async fn search(
        &self,
        query: &str,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> AppResult<SearchResults> {
        let mut params = vec![("q", query.to_string())];
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_data(self.url("v1/folders/search", &params)?).await
    }
}
