//! # explorer-client
//!
//! Consumer side of the explorer HTTP API: the [`ExplorerApi`] trait, a
//! `reqwest` implementation, and [`ExplorerStore`], which keeps the tree,
//! the current folder view and search results for a browsing session.

pub mod api;
pub mod http;
pub mod store;

pub use api::ExplorerApi;
pub use http::ExplorerClient;
pub use store::{CurrentContents, ExplorerState, ExplorerStore, SearchState};
