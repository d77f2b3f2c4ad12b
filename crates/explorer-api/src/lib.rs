//! # explorer-api
//!
//! HTTP API layer for the file explorer built on Axum.
//!
//! Provides the folder tree, folder contents and search endpoints, the
//! request logging and CORS middleware, query extractors, and the mapping
//! of `AppError` onto `{success, error, message}` bodies.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
