//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/users`, `/courses`, `/courses/{id}` - REST API (see [`crate::api::routes`])
//! - anything else                         - `404 {"message": "Route Not Found"}`
//!
//! # Middleware
//!
//! - **Panic containment** - Handler panics become a generic 500
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (served router only)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{panic, rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the API router with fallback, panic containment and tracing.
///
/// This is the router exercised by tests; it does not depend on the peer
/// address of the connection.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::api_routes(state.clone()))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}

/// Constructs the served application: [`api_router`] plus per-IP rate
/// limiting and trailing-slash normalization.
///
/// Must be served with connect info so the rate limiter can read the peer
/// address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api_router(state).layer(rate_limit::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
