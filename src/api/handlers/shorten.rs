//! Handler for the URL shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{Method, Uri},
};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::RequestInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "https://short.ly/aB3xY9" }
/// ```
///
/// # Errors
///
/// - **400** `{"error": "URL requerida"}` if the body has no usable
///   `originalUrl` (empty, missing, `null`, or an unreadable body).
///   A non-string value such as `42` is rejected, not stringified.
/// - **500** `{"error": "Error en el servidor"}` on store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = match payload {
        Ok(Json(body)) => body.original_url,
        Err(rejection) => {
            debug!(%rejection, "Unreadable shorten request body");
            None
        }
    };

    let request = RequestInfo::new(method.as_str(), uri.path());

    let shortened = state
        .shorten_service
        .shorten(original_url.as_deref(), &request)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: shortened.short_url,
    }))
}
