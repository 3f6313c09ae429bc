//! Item read, update and delete handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use inventory_core::error::AppError;
use inventory_core::types::ItemId;
use inventory_database::ItemStore;

use crate::dto::{ItemResponse, UpdateItemRequest};
use crate::extractors::JsonOrForm;
use crate::state::AppState;

/// GET /inventory
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses((status = 200, description = "All items", body = [ItemResponse]))
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.store.list().await?;
    Ok(Json(
        items
            .into_iter()
            .map(|item| ItemResponse::from_item(item, &state))
            .collect(),
    ))
}

/// GET /inventory/{id}
#[utoipa::path(
    get,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let id = ItemId::from(id);
    let item = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;
    Ok(Json(ItemResponse::from_item(item, &state)))
}

/// PUT /inventory/{id}
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item identifier")),
    request_body(content = UpdateItemRequest, description = "Fields to change"),
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Empty name or malformed body"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonOrForm(req): JsonOrForm<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let id = ItemId::from(id);
    let changes = req.into_changes()?;

    let item = state
        .store
        .update(&id, &changes)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

    info!(id = %item.id, "Updated item");
    Ok(Json(ItemResponse::from_item(item, &state)))
}

/// DELETE /inventory/{id}
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = ItemId::from(id);
    let removed = state
        .store
        .remove(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

    info!(id = %removed.id, "Deleted item");

    if state.removes_stale_photos() {
        if let Some(key) = removed.photo.as_deref() {
            state.photos.discard(key).await;
        }
    }

    Ok(StatusCode::OK)
}
