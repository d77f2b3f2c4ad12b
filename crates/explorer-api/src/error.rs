//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::types::response::ApiErrorResponse;

/// Handler error: an `AppError` rendered as a JSON error body.
///
/// Not-found maps to 404; every other kind maps to 500.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.0.kind.code(), error = %self.0.message, "Request failed");
        }

        let body = ApiErrorResponse::new(self.0.kind.code(), self.0.message);
        (status, Json(body)).into_response()
    }
}
