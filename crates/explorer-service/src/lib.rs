//! # explorer-service
//!
//! Query services over the record store. Each service holds its store
//! dependencies as `Arc` trait objects handed in at construction time.
//!
//! Store failures are logged here and surfaced as a fixed per-operation
//! message; not-found and validation errors pass through unchanged.

pub mod explorer;
mod failure;
pub mod file;
pub mod folder;

#[cfg(test)]
mod testing;

pub use explorer::ExplorerService;
pub use file::FileService;
pub use folder::FolderService;
pub use folder::tree::{build_tree, find_orphans};
