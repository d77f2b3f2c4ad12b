//! Core type definitions used across the explorer workspace.

pub mod pagination;
pub mod response;

pub use pagination::{PageRequest, PageResponse, Pagination};
pub use response::{ApiErrorResponse, ApiResponse};
