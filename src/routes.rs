//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Liveness probe
//! - `POST /shorten`     - Create a short URL
//! - `GET  /{short_id}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configurable origins, `GET`/`POST` only
//!
//! Trailing-slash normalization wraps this router in [`crate::server`].

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - CORS origins; a `*` entry allows any origin
pub fn app_router(state: AppState, allowed_origins: &[String]) -> Router {
    api::routes::public_routes()
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer())
}
