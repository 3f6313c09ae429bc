//! Store manager that dispatches to the configured item store variant.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use inventory_core::config::{DatabaseConfig, StoreBackend, StoreConfig};
use inventory_core::result::AppResult;
use inventory_core::types::ItemId;
use inventory_entity::item::{CreateItem, Item, UpdateItem};

use crate::connection::DatabasePool;
use crate::memory::MemoryItemStore;
use crate::migration::run_migrations;
use crate::repositories::ItemRepository;
use crate::store::{ItemStore, PhotoReplaced};

/// Item store selected at startup.
///
/// Callers only see the [`ItemStore`] contract; which variant answers is
/// decided once, from configuration, when the manager is built.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn ItemStore>,
}

impl StoreManager {
    /// Build the configured store variant.
    ///
    /// For `postgres` this connects the pool, verifies connectivity, and
    /// applies migrations; any failure is returned so the process can refuse
    /// to start.
    pub async fn new(store: &StoreConfig, database: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn ItemStore> = match store.backend {
            StoreBackend::Memory => {
                info!("Initializing in-memory item store (items are lost on restart)");
                Arc::new(MemoryItemStore::new())
            }
            StoreBackend::Postgres => {
                info!("Initializing PostgreSQL item store");
                let db = DatabasePool::connect(database).await?;
                if database.auto_migrate {
                    run_migrations(db.pool()).await?;
                }
                Arc::new(ItemRepository::new(db.into_pool()))
            }
        };

        Ok(Self { inner })
    }

    /// Create a manager around a fresh in-memory store.
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryItemStore::new()),
        }
    }
}

#[async_trait]
impl ItemStore for StoreManager {
    fn backend(&self) -> &str {
        self.inner.backend()
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }

    async fn create(&self, data: CreateItem) -> AppResult<Item> {
        self.inner.create(data).await
    }

    async fn get(&self, id: &ItemId) -> AppResult<Option<Item>> {
        self.inner.get(id).await
    }

    async fn list(&self) -> AppResult<Vec<Item>> {
        self.inner.list().await
    }

    async fn update(&self, id: &ItemId, changes: &UpdateItem) -> AppResult<Option<Item>> {
        self.inner.update(id, changes).await
    }

    async fn replace_photo(&self, id: &ItemId, photo: &str) -> AppResult<Option<PhotoReplaced>> {
        self.inner.replace_photo(id, photo).await
    }

    async fn remove(&self, id: &ItemId) -> AppResult<Option<Item>> {
        self.inner.remove(id).await
    }
}
