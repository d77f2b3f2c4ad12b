//! Route definitions for the file explorer HTTP API.
//!
//! Folder endpoints are mounted under `/v1`; the banner and health check
//! sit at the top level.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/health", get(handlers::health::health))
        .nest("/v1", folder_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Folder endpoints: tree, search, contents.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::get_folder_tree))
        .route("/folders/search", get(handlers::folder::search))
        .route("/folders/{id}/contents", get(handlers::folder::get_folder_contents))
}
