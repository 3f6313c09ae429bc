//! Search handler.

use axum::Json;
use axum::extract::State;

use inventory_core::error::AppError;
use inventory_database::ItemStore;

use crate::dto::{ItemResponse, SearchRequest};
use crate::extractors::JsonOrForm;
use crate::state::AppState;

/// POST /search
///
/// With `has_photo = "on"` the returned description gets a
/// ` Photo: <url|None>` suffix; the stored item is not changed.
#[utoipa::path(
    post,
    path = "/search",
    tag = "inventory",
    request_body(content = SearchRequest, description = "JSON or urlencoded form"),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 400, description = "id missing"),
        (status = 404, description = "Not found")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<SearchRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let id = req.item_id()?;

    let item = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

    let response = ItemResponse::from_item(item, &state);
    Ok(Json(if req.wants_photo_note() {
        response.with_photo_note()
    } else {
        response
    }))
}
