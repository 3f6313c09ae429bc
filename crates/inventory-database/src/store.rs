//! The item store contract shared by every persistence variant.

use async_trait::async_trait;

use inventory_core::result::AppResult;
use inventory_core::types::ItemId;
use inventory_entity::item::{CreateItem, Item, UpdateItem};

/// Outcome of pointing an item at a new photo file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoReplaced {
    /// The item after the change.
    pub item: Item,
    /// The photo reference the item held before, if any.
    pub previous: Option<String>,
}

/// Create/read/list/update/delete access to inventory items.
///
/// Every mutation is applied to a whole record at once, so readers never
/// observe a half-updated item. Identifiers are allocated by the store,
/// are unique, and never change.
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "memory", "postgres").
    fn backend(&self) -> &str;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Persist a new item under a freshly allocated identifier.
    ///
    /// Fails with a validation error if the name is empty.
    async fn create(&self, data: CreateItem) -> AppResult<Item>;

    /// Find an item by identifier.
    async fn get(&self, id: &ItemId) -> AppResult<Option<Item>>;

    /// List all items in insertion order.
    async fn list(&self) -> AppResult<Vec<Item>>;

    /// Apply the supplied fields, returning the updated item.
    async fn update(&self, id: &ItemId, changes: &UpdateItem) -> AppResult<Option<Item>>;

    /// Point an item at a new photo file and report the reference it replaced.
    async fn replace_photo(&self, id: &ItemId, photo: &str) -> AppResult<Option<PhotoReplaced>>;

    /// Remove an item, returning the record that was removed.
    async fn remove(&self, id: &ItemId) -> AppResult<Option<Item>>;

    /// Set the photo reference without touching other fields.
    async fn set_photo(&self, id: &ItemId, photo: &str) -> AppResult<Option<Item>> {
        Ok(self.replace_photo(id, photo).await?.map(|r| r.item))
    }

    /// Delete an item. Returns `true` if a record existed and was removed.
    async fn delete(&self, id: &ItemId) -> AppResult<bool> {
        Ok(self.remove(id).await?.is_some())
    }
}
