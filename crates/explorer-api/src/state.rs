//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_database::DatabasePool;
use explorer_service::ExplorerService;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Folder tree, contents and search.
    pub explorer: ExplorerService,
    /// Connection pool when running on PostgreSQL; `None` for the
    /// in-memory backend.
    pub db_pool: Option<DatabasePool>,
}

impl AppState {
    pub fn new(config: AppConfig, explorer: ExplorerService, db_pool: Option<DatabasePool>) -> Self {
        Self {
            config: Arc::new(config),
            explorer,
            db_pool,
        }
    }
}
