//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs request method, path, query, status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, %path, ?query, status, duration_ms, "HTTP request failed");
    } else {
        info!(%method, %path, ?query, status, duration_ms, "HTTP request");
    }

    response
}
