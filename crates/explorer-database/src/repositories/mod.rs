//! Record store backends.

pub mod file;
pub mod folder;
pub mod memory;

pub use file::FileRepository;
pub use folder::FolderRepository;
pub use memory::{MemoryFileRepository, MemoryFolderRepository, MemoryStore};
