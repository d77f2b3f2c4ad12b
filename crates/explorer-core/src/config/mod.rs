//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::{LogFormat, LoggingConfig};
pub use self::store::{SearchConfig, StoreBackend, StoreConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (base file + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Record store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Search defaults.
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the given file with an optional `config/{env}.toml` overlay
    /// (selected by `EXPLORER_ENV`) and environment variables prefixed
    /// with `EXPLORER__`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let env = std::env::var("EXPLORER_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("EXPLORER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Parse configuration from TOML text alone, without file or
    /// environment layering.
    pub fn from_toml(toml: &str) -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AppError::configuration(format!("Invalid configuration: {e}")))
    }
}
