//! Folder tree and folder contents services.

pub mod service;
pub mod tree;

pub use service::FolderService;
