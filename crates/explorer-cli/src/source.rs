//! Where the browse commands read from: the configured record store, or
//! a running server.

use async_trait::async_trait;
use uuid::Uuid;

use explorer_client::{ExplorerApi, ExplorerClient};
use explorer_core::config::AppConfig;
use explorer_core::result::AppResult;
use explorer_core::types::pagination::{DEFAULT_PAGE, PageRequest};
use explorer_entity::{FolderContents, FolderNode, SearchResults};
use explorer_service::ExplorerService;

/// Serves [`ExplorerApi`] calls straight from the services, without HTTP.
#[derive(Debug, Clone)]
pub struct LocalExplorer {
    explorer: ExplorerService,
    default_limit: u64,
}

impl LocalExplorer {
    pub fn new(explorer: ExplorerService, default_limit: u64) -> Self {
        Self {
            explorer,
            default_limit,
        }
    }
}

#[async_trait]
impl ExplorerApi for LocalExplorer {
    async fn get_folder_tree(&self) -> AppResult<Vec<FolderNode>> {
        Ok(self.explorer.folder_tree().await?.roots)
    }

    async fn get_folder_contents(&self, folder_id: Option<Uuid>) -> AppResult<FolderContents> {
        self.explorer.folder_contents(folder_id).await
    }

    async fn search(
        &self,
        query: &str,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> AppResult<SearchResults> {
        let request = PageRequest::new(
            page.unwrap_or(DEFAULT_PAGE),
            limit.unwrap_or(self.default_limit),
        )?;
        self.explorer.search(query, &request).await
    }
}

/// Opens the explorer the browse commands talk to.
pub async fn open(config: AppConfig, server: Option<&str>) -> AppResult<Box<dyn ExplorerApi>> {
    match server {
        Some(url) => {
            tracing::debug!(%url, "Browsing through the HTTP API");
            Ok(Box::new(ExplorerClient::new(url)?))
        }
        None => {
            let default_limit = config.search.default_limit;
            let state = explorer_api::build_state(config).await?;
            Ok(Box::new(LocalExplorer::new(state.explorer, default_limit)))
        }
    }
}
