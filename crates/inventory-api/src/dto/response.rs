//! Response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use inventory_entity::Item;

use crate::state::AppState;

/// Item as rendered to clients, with the computed photo link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    /// Item identifier.
    pub id: String,
    /// Item name.
    pub name: String,
    /// Item description.
    pub description: String,
    /// Photo reference in the cache directory.
    pub photo: Option<String>,
    /// Absolute URL of the photo endpoint, `null` without a photo.
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

impl ItemResponse {
    /// Render an item against the configured public URL.
    pub fn from_item(item: Item, state: &AppState) -> Self {
        let photo_url = item.has_photo().then(|| state.photo_url(&item.id));
        Self {
            id: item.id.into(),
            name: item.name,
            description: item.description,
            photo: item.photo,
            photo_url,
        }
    }

    /// Append the human-readable photo note used by search.
    pub fn with_photo_note(mut self) -> Self {
        let link = self.photo_url.as_deref().unwrap_or("None");
        self.description = format!("{} Photo: {}", self.description, link);
        self
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok` when every dependency is reachable, otherwise `degraded`.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Item store variant.
    pub store: String,
    /// Whether the item store answered.
    pub store_reachable: bool,
    /// Whether the photo cache directory is usable.
    pub cache_reachable: bool,
}
