//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler, status_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`            - Liveness probe
/// - `POST /shorten`     - Create a short URL
/// - `GET  /{short_id}`  - Redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{short_id}", get(redirect_handler))
}
