//! Generic record store traits.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::{PageRequest, PageResponse};

/// Generic identity-keyed record store.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed store. Entity-specific query
/// methods are defined on the store traits that extend it.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Insert the entity, or overwrite the record with the same id.
    async fn save(&self, entity: &Entity) -> AppResult<Entity>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// Case-insensitive substring search with skip/limit pagination.
#[async_trait]
pub trait Searchable<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Return one page of matches ordered by name, plus the total match count.
    async fn search(&self, query: &str, page: &PageRequest) -> AppResult<PageResponse<Entity>>;
}
