//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`, `/users/{id}`     - User CRUD
//! - `/courses`, `/courses/{id}` - Course CRUD
//! - `GET /health`               - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, CRUD methods
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::resource_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(api::middleware::cors::layer())
        .layer(api::middleware::tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
