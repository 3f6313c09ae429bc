//! Item registration handler.

use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use inventory_core::error::AppError;
use inventory_database::ItemStore;
use inventory_entity::CreateItem;

use crate::extractors::UploadForm;
use crate::state::AppState;

/// POST /register
///
/// Multipart form with `inventory_name`, optional `description` and an
/// optional `photo` file.
#[utoipa::path(
    post,
    path = "/register",
    tag = "inventory",
    request_body(content = crate::dto::RegisterForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Item created"),
        (status = 400, description = "inventory_name missing"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    mut form: UploadForm,
) -> Result<StatusCode, AppError> {
    let name = form
        .text("inventory_name")
        .ok_or_else(|| AppError::validation("inventory_name is required"))?
        .to_string();

    let mut data = CreateItem {
        name,
        description: form.fields.get("description").cloned(),
        photo: None,
    };
    data.validate()?;

    if let Some(upload) = form.take_photo() {
        let key = state
            .photos
            .store(upload.data, upload.file_name.as_deref())
            .await?;
        data.photo = Some(key);
    }

    let photo = data.photo.clone();
    match state.store.create(data).await {
        Ok(item) => {
            info!(id = %item.id, name = %item.name, has_photo = item.has_photo(), "Registered item");
            Ok(StatusCode::CREATED)
        }
        Err(e) => {
            if let Some(key) = photo {
                state.photos.discard(&key).await;
            }
            Err(e)
        }
    }
}
