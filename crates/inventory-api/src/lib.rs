//! # inventory-api
//!
//! HTTP API layer for the inventory service built on Axum.
//!
//! Provides the item and photo endpoints, the search endpoint, the static
//! form pages and OpenAPI document, middleware (CORS, logging), extractors,
//! and DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
