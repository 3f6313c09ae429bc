//! Application builder: wires router, middleware and state into an Axum app.

use axum::Router;
use tower_http::normalize_path::NormalizePath;
use tracing::{error, info};

use inventory_core::config::AppConfig;
use inventory_core::error::{AppError, ErrorKind};
use inventory_database::{ItemStore, StoreManager};
use inventory_storage::PhotoCache;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/inventory/` is served
/// by the `/inventory` route.
pub fn build_app(state: AppState) -> Router {
    Router::new().fallback_service(NormalizePath::trim_trailing_slash(build_router(state)))
}

/// Runs the inventory server until Ctrl+C.
///
/// The cache directory is created before the listener is bound; failing to
/// create it or to bind refuses startup.
pub async fn run_server(config: AppConfig, store: StoreManager) -> Result<(), AppError> {
    info!("Starting inventory server...");

    // ── Step 1: Photo cache directory ────────────────────────────
    let photos = create_photo_cache(&config).await?;

    // ── Step 2: Build and start HTTP server ──────────────────────
    let addr = config.server.bind_address();
    let store_backend = store.backend().to_string();
    let state = AppState::new(config, store, photos);
    let public_url = state.public_url.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(
        address = %addr,
        url = %public_url,
        store = %store_backend,
        "Inventory server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("Inventory server stopped");
    Ok(())
}

/// Create the cache directory (recursively) and open the photo cache on it.
pub async fn create_photo_cache(config: &AppConfig) -> Result<PhotoCache, AppError> {
    let dir = &config.storage.cache_dir;
    let photos = PhotoCache::open(dir).await.map_err(|e| {
        AppError::new(
            e.kind,
            format!("Failed to create cache dir '{dir}': {}", e.message),
        )
    })?;

    let resolved = std::fs::canonicalize(dir)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| dir.clone());
    info!(cache_dir = %resolved, "Photo cache ready");

    Ok(photos)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
