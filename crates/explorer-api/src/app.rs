//! Application builder: wires the record store, services and router
//! into an Axum app and serves it.

use std::time::Duration;

use axum::Router;
use tracing::{info, warn};

use explorer_core::config::{AppConfig, StoreBackend};
use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_database::seed::seed_sample_data;
use explorer_database::{DatabasePool, MemoryStore};
use explorer_service::ExplorerService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Opens the configured record store and wires the services onto it.
///
/// Seeds the sample hierarchy first when `store.seed_on_start` is set.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let (stores, db_pool) = match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory record store");
            (MemoryStore::new().stores(), None)
        }
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            (pool.stores(), Some(pool))
        }
    };

    if config.store.seed_on_start {
        seed_sample_data(&stores).await?;
    }

    let explorer = ExplorerService::from_stores(&stores);
    Ok(AppState::new(config, explorer, db_pool))
}

/// Runs the explorer server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting file explorer v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = build_state(config).await?;
    let db_pool = state.db_pool.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("File explorer listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        info!("Shutdown signal received, draining connections...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = db_pool {
        if tokio::time::timeout(grace, pool.close()).await.is_err() {
            warn!(grace_seconds = grace.as_secs(), "Database pool did not close in time");
        }
    }

    info!("File explorer shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
