//! In-memory item store. Items live only as long as the process.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use inventory_core::result::AppResult;
use inventory_core::types::ItemId;
use inventory_entity::item::{CreateItem, Item, UpdateItem};

use crate::store::{ItemStore, PhotoReplaced};

/// Item store backed by an owned, lock-protected list.
///
/// Identifiers are millisecond timestamps rendered as strings. Two creations
/// within the same millisecond get consecutive values, so an identifier is
/// never handed out twice.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<Item>,
    last_stamp: i64,
}

impl MemoryState {
    fn next_id(&mut self) -> ItemId {
        let stamp = Utc::now().timestamp_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;
        ItemId::from(stamp)
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn backend(&self) -> &str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn create(&self, data: CreateItem) -> AppResult<Item> {
        data.validate()?;

        let mut state = self.state.write().await;
        let id = state.next_id();
        let item = data.into_item(id);
        state.items.push(item.clone());

        debug!(id = %item.id, "Created item");
        Ok(item)
    }

    async fn get(&self, id: &ItemId) -> AppResult<Option<Item>> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| &item.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Item>> {
        Ok(self.state.read().await.items.clone())
    }

    async fn update(&self, id: &ItemId, changes: &UpdateItem) -> AppResult<Option<Item>> {
        changes.validate()?;

        let mut state = self.state.write().await;
        let Some(pos) = state.position(id) else {
            return Ok(None);
        };

        let item = &mut state.items[pos];
        changes.apply_to(item);
        Ok(Some(item.clone()))
    }

    async fn replace_photo(&self, id: &ItemId, photo: &str) -> AppResult<Option<PhotoReplaced>> {
        let mut state = self.state.write().await;
        let Some(pos) = state.position(id) else {
            return Ok(None);
        };

        let item = &mut state.items[pos];
        let previous = item.photo.replace(photo.to_string());
        Ok(Some(PhotoReplaced {
            item: item.clone(),
            previous,
        }))
    }

    async fn remove(&self, id: &ItemId) -> AppResult<Option<Item>> {
        let mut state = self.state.write().await;
        let removed = state.position(id).map(|pos| state.items.remove(pos));

        if let Some(item) = &removed {
            debug!(id = %item.id, "Removed item");
        }
        Ok(removed)
    }
}
