//! Item repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use inventory_core::error::{AppError, ErrorKind};
use inventory_core::result::AppResult;
use inventory_core::types::ItemId;
use inventory_entity::item::{CreateItem, Item, UpdateItem};

use crate::store::{ItemStore, PhotoReplaced};

/// Row shape of the `items` table.
#[derive(Debug, Clone, FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    photo: Option<String>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: ItemId::from(row.id),
            name: row.name,
            description: row.description.unwrap_or_default(),
            photo: row.photo,
        }
    }
}

/// Row returned by the photo swap, carrying the replaced reference.
#[derive(Debug, Clone, FromRow)]
struct PhotoSwapRow {
    id: i64,
    name: String,
    description: Option<String>,
    photo: Option<String>,
    previous_photo: Option<String>,
}

/// Repository for item CRUD against PostgreSQL.
///
/// Identifiers are `BIGSERIAL` keys. An identifier that is not a decimal
/// integer cannot name a row and is reported as not found.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn create(&self, data: CreateItem) -> AppResult<Item> {
        data.validate()?;

        sqlx::query_as::<_, ItemRow>(
            "INSERT INTO items (name, description, photo) VALUES ($1, $2, $3) \
             RETURNING id, name, description, photo",
        )
        .bind(&data.name)
        .bind(data.description.as_deref().unwrap_or(""))
        .bind(data.photo.as_deref().filter(|p| !p.is_empty()))
        .fetch_one(&self.pool)
        .await
        .map(Item::from)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    async fn get(&self, id: &ItemId) -> AppResult<Option<Item>> {
        let Some(key) = id.as_serial() else {
            return Ok(None);
        };

        sqlx::query_as::<_, ItemRow>(
            "SELECT id, name, description, photo FROM items WHERE id = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Item::from))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    async fn list(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, ItemRow>("SELECT id, name, description, photo FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(Item::from).collect())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    async fn update(&self, id: &ItemId, changes: &UpdateItem) -> AppResult<Option<Item>> {
        changes.validate()?;
        let Some(key) = id.as_serial() else {
            return Ok(None);
        };

        sqlx::query_as::<_, ItemRow>(
            "UPDATE items SET name = COALESCE($2, name), description = COALESCE($3, description) \
             WHERE id = $1 RETURNING id, name, description, photo",
        )
        .bind(key)
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Item::from))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    async fn replace_photo(&self, id: &ItemId, photo: &str) -> AppResult<Option<PhotoReplaced>> {
        let Some(key) = id.as_serial() else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, PhotoSwapRow>(
            "WITH previous AS (SELECT id, photo FROM items WHERE id = $1 FOR UPDATE) \
             UPDATE items SET photo = $2 FROM previous WHERE items.id = previous.id \
             RETURNING items.id, items.name, items.description, items.photo, \
             previous.photo AS previous_photo",
        )
        .bind(key)
        .bind(photo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set item photo", e))?;

        Ok(row.map(|row| PhotoReplaced {
            item: Item {
                id: ItemId::from(row.id),
                name: row.name,
                description: row.description.unwrap_or_default(),
                photo: row.photo,
            },
            previous: row.previous_photo,
        }))
    }

    async fn remove(&self, id: &ItemId) -> AppResult<Option<Item>> {
        let Some(key) = id.as_serial() else {
            return Ok(None);
        };

        sqlx::query_as::<_, ItemRow>(
            "DELETE FROM items WHERE id = $1 RETURNING id, name, description, photo",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(Item::from))
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))
    }
}
