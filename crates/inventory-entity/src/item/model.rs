//! Inventory item entity model.

use serde::{Deserialize, Serialize};

use inventory_core::error::AppError;
use inventory_core::result::AppResult;
use inventory_core::types::ItemId;

/// An inventory item as held by an item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation.
    pub id: ItemId,
    /// Item name, never empty.
    pub name: String,
    /// Free-text description, empty when none was given.
    pub description: String,
    /// Filename of the photo in the cache directory, if one was uploaded.
    pub photo: Option<String>,
}

impl Item {
    /// Whether a photo reference is set.
    pub fn has_photo(&self) -> bool {
        self.photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Data required to create a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name.
    pub name: String,
    /// Description; `None` is stored as an empty string.
    pub description: Option<String>,
    /// Photo filename, when the registration carried a file.
    pub photo: Option<String>,
}

impl CreateItem {
    /// Create a change set with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reject creations without a name.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::validation("Item name is required"));
        }
        Ok(())
    }

    /// Build the stored record for a freshly allocated identifier.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            photo: self.photo.filter(|p| !p.is_empty()),
        }
    }
}

/// Field changes applied by an update. Absent fields are left untouched.
///
/// Carries no `id` or `photo`: identifiers are immutable and the photo
/// reference is only set by a photo upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl UpdateItem {
    /// Reject updates that would blank out the name.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(AppError::validation("Item name must not be empty"));
            }
        }
        Ok(())
    }

    /// Apply the supplied fields to an item in place.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
    }
}
