//! # explorer-core
//!
//! Core crate for the file explorer. Contains the record store traits,
//! configuration schemas, pagination and response envelope types, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other explorer crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
