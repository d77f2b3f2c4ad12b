//! File explorer server.
//!
//! Loads configuration, installs logging and serves the explorer API.

use tracing_subscriber::{EnvFilter, fmt};

use explorer_core::config::{AppConfig, LogFormat};
use explorer_core::result::AppResult;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!(
        backend = config.store.backend.as_str(),
        seed_on_start = config.store.seed_on_start,
        "Configuration loaded"
    );

    if let Err(e) = explorer_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `EXPLORER_CONFIG` (default `config/default.toml`)
/// and the environment.
fn load_configuration() -> AppResult<AppConfig> {
    let config_path =
        std::env::var("EXPLORER_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        LogFormat::Pretty => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
