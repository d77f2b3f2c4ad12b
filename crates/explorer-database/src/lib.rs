//! # explorer-database
//!
//! Record store for folders and files: the store traits consumed by the
//! query services, a PostgreSQL backend built on sqlx, an in-memory
//! backend built on dashmap, migrations, and sample data seeding.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::{FileRepository, FolderRepository, MemoryStore};
pub use store::{FileStore, FolderStore, Stores};
