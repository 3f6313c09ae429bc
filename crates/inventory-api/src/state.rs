//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use inventory_core::config::AppConfig;
use inventory_core::types::ItemId;
use inventory_database::StoreManager;
use inventory_storage::PhotoCache;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Item store selected at startup
    pub store: Arc<StoreManager>,
    /// Photo cache directory
    pub photos: Arc<PhotoCache>,
    /// Base URL for computed photo links, without trailing slash
    pub public_url: Arc<str>,
}

impl AppState {
    /// Assemble the state from its parts.
    pub fn new(config: AppConfig, store: StoreManager, photos: PhotoCache) -> Self {
        let public_url: Arc<str> = config.server.public_base_url().into();
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            photos: Arc::new(photos),
            public_url,
        }
    }

    /// Absolute URL of an item's photo endpoint.
    pub fn photo_url(&self, id: &ItemId) -> String {
        format!("{}/inventory/{}/photo", self.public_url, id)
    }

    /// Whether replaced or orphaned photo files are deleted.
    pub fn removes_stale_photos(&self) -> bool {
        self.config.storage.remove_stale_photos
    }
}
