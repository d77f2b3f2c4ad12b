//! File listing and search.

pub mod service;

pub use service::FileService;
