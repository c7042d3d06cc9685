use uuid::Uuid;

use crate::{error::AppResult, models::ClothingItem};

/// Persistence for wardrobe items
///
/// Every operation is scoped to one owner; an owner never sees or deletes
/// another owner's items.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// All of the owner's items, newest first
    async fn list_items(&self, owner: &str) -> AppResult<Vec<ClothingItem>>;

    /// Stores a new item for the owner and returns it as stored
    async fn insert_item(&self, owner: &str, item: ClothingItem) -> AppResult<ClothingItem>;

    /// Removes one of the owner's items; `false` when the owner has no such item
    async fn delete_item(&self, owner: &str, id: Uuid) -> AppResult<bool>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
