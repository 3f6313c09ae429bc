//! Route definitions for the inventory HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Paths with a route answer undefined methods with 405;
//! every other path falls through to the 405 fallback.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload =
        usize::try_from(state.config.server.max_upload_size_bytes).unwrap_or(usize::MAX);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(item_routes())
        .merge(search_routes())
        .merge(page_routes())
        .merge(docs_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::method_not_allowed)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::cors::reject_bare_options))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Item registration, CRUD and photo endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register::register))
        .route("/inventory", get(handlers::inventory::list_items))
        .route(
            "/inventory/{id}",
            get(handlers::inventory::get_item)
                .put(handlers::inventory::update_item)
                .delete(handlers::inventory::delete_item),
        )
        .route(
            "/inventory/{id}/photo",
            get(handlers::photo::get_photo).put(handlers::photo::put_photo),
        )
}

/// Search by identifier
fn search_routes() -> Router<AppState> {
    Router::new().route("/search", post(handlers::search::search))
}

/// Static HTML forms
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/RegisterForm.html", get(handlers::pages::register_form))
        .route("/SearchForm.html", get(handlers::pages::search_form))
}

/// OpenAPI document and viewer
fn docs_routes() -> Router<AppState> {
    Router::new()
        .route("/docs", get(handlers::docs::swagger_ui))
        .route("/docs/openapi.json", get(handlers::docs::openapi_json))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

