//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

use inventory_core::error::AppError;
use inventory_core::result::AppResult;
use inventory_core::types::ItemId;
use inventory_entity::UpdateItem;

/// Update item request body.
///
/// Unknown fields, including `id` and `photo`, are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemRequest {
    /// New name.
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl UpdateItemRequest {
    /// Validate and convert into the store change set.
    pub fn into_changes(self) -> AppResult<UpdateItem> {
        self.validate()
            .map_err(|e| AppError::validation(format!("Invalid update: {e}")))?;

        let changes = UpdateItem {
            name: self.name,
            description: self.description,
        };
        changes.validate()?;
        Ok(changes)
    }
}

/// Identifier as sent by a search client: a string or a bare number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SearchId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl SearchId {
    /// Convert into an item id; blank strings yield `None`.
    pub fn into_item_id(self) -> Option<ItemId> {
        match self {
            Self::Number(n) => Some(ItemId::from(n)),
            Self::Text(s) if s.trim().is_empty() => None,
            Self::Text(s) => Some(ItemId::from(s.trim())),
        }
    }
}

/// Search request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Identifier of the item to look up.
    pub id: Option<SearchId>,
    /// `"on"` appends a photo link note to the returned description.
    #[serde(default, deserialize_with = "string_or_absent")]
    #[schema(example = "on")]
    pub has_photo: Option<String>,
}

/// Non-string values (booleans, numbers, null) read as absent.
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl SearchRequest {
    /// The requested identifier, or a validation error when absent.
    pub fn item_id(&self) -> AppResult<ItemId> {
        self.id
            .clone()
            .and_then(SearchId::into_item_id)
            .ok_or_else(|| AppError::validation("Search id is required"))
    }

    /// Whether the photo note was requested.
    pub fn wants_photo_note(&self) -> bool {
        self.has_photo.as_deref() == Some("on")
    }
}

/// Multipart body of `POST /register` (documentation only).
#[derive(Debug, ToSchema)]
pub struct RegisterForm {
    /// Item name.
    pub inventory_name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional photo file.
    #[schema(value_type = Option<String>, format = Binary)]
    pub photo: Option<Vec<u8>>,
}

/// Multipart body of `PUT /inventory/{id}/photo` (documentation only).
#[derive(Debug, ToSchema)]
pub struct PhotoForm {
    /// Photo file.
    #[schema(value_type = String, format = Binary)]
    pub photo: Vec<u8>,
}
