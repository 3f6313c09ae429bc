//! Photo sub-resource handlers.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tracing::info;

use inventory_core::error::AppError;
use inventory_core::types::ItemId;
use inventory_database::ItemStore;

use crate::extractors::UploadForm;
use crate::state::AppState;

/// GET /inventory/{id}/photo
///
/// A missing item, an unset reference and a file gone from the cache
/// directory are all answered with 404.
#[utoipa::path(
    get,
    path = "/inventory/{id}/photo",
    tag = "photo",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Photo bytes with an image content type"),
        (status = 404, description = "No such item or photo")
    )
)]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = ItemId::from(id);
    let not_found = || AppError::not_found(format!("No photo for item {id}"));

    let item = state.store.get(&id).await?.ok_or_else(not_found)?;
    let key = item.photo.as_deref().ok_or_else(not_found)?;
    let photo = state.photos.open_photo(key).await?.ok_or_else(not_found)?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, photo.content_type)
        .header(header::CONTENT_LENGTH, photo.size_bytes)
        .body(Body::from_stream(photo.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}

/// PUT /inventory/{id}/photo
///
/// The file is completely written before the item references it; the
/// previous file is removed afterwards when stale-photo cleanup is on.
#[utoipa::path(
    put,
    path = "/inventory/{id}/photo",
    tag = "photo",
    params(("id" = String, Path, description = "Item identifier")),
    request_body(content = crate::dto::PhotoForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored"),
        (status = 400, description = "No file uploaded"),
        (status = 404, description = "Not found")
    )
)]
pub async fn put_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut form: UploadForm,
) -> Result<StatusCode, AppError> {
    let id = ItemId::from(id);

    if state.store.get(&id).await?.is_none() {
        return Err(AppError::not_found(format!("Item {id} not found")));
    }
    let upload = form
        .take_photo()
        .ok_or_else(|| AppError::validation("photo file is required"))?;

    let key = state
        .photos
        .store(upload.data, upload.file_name.as_deref())
        .await?;

    let replaced = match state.store.replace_photo(&id, &key).await {
        Ok(Some(replaced)) => replaced,
        Ok(None) => {
            state.photos.discard(&key).await;
            return Err(AppError::not_found(format!("Item {id} not found")));
        }
        Err(e) => {
            state.photos.discard(&key).await;
            return Err(e);
        }
    };

    info!(id = %id, photo = %key, "Stored photo");

    if state.removes_stale_photos() {
        if let Some(previous) = replaced.previous.as_deref().filter(|p| *p != key) {
            state.photos.discard(previous).await;
        }
    }

    Ok(StatusCode::OK)
}
