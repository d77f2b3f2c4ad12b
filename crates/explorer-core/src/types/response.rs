//! Response envelopes for API endpoints.

use serde::{Deserialize, Serialize};

/// Standard success envelope: `{ data, message }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload.
    pub data: T,
    /// Human-readable summary of the operation.
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` with a success message.
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Standard API error response body: `{ success: false, error, message }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiErrorResponse {
    /// Build an error body.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
