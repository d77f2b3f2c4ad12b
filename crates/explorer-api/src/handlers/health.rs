//! Banner and health check handlers.

use axum::Json;
use axum::extract::State;

use explorer_core::types::response::ApiResponse;

use crate::dto::{BannerResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "File Explorer API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, ApiError> {
    if let Some(pool) = &state.db_pool {
        pool.ping().await?;
    }

    Ok(Json(ApiResponse::new(
        HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: state.config.store.backend.as_str().to_string(),
        },
        "Service is healthy",
    )))
}
