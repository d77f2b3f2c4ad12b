//! Request extractors.

pub mod path;
pub mod search;

pub use path::parse_folder_ref;
pub use search::SearchQuery;
