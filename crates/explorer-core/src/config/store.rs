//! Record store and search configuration.

use serde::{Deserialize, Serialize};

use crate::types::pagination::DEFAULT_LIMIT;

/// Which record store implementation backs the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgreSQL via sqlx.
    #[default]
    Postgres,
    /// Process-local in-memory maps. Data is lost on restart.
    Memory,
}

impl StoreBackend {
    /// Lowercase name, as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Selected backend.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Load the sample folder hierarchy when the server starts.
    #[serde(default)]
    pub seed_on_start: bool,
}

/// Search endpoint defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Page size used when the request omits `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}
