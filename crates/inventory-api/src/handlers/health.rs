//! Health check handler.

use axum::Json;
use axum::extract::State;

use inventory_database::ItemStore;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service health", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_reachable = state.store.health_check().await.unwrap_or(false);
    let cache_reachable = state.photos.health_check().await.unwrap_or(false);

    let status = if store_reachable && cache_reachable {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.backend().to_string(),
        store_reachable,
        cache_reachable,
    })
}
