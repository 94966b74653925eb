//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::application::services::RequestInfo;
use crate::error::{AppError, SERVER_ERROR};
use crate::state::AppState;
use crate::utils::location::encode_location;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Response Codes
///
/// - **302 Found** with `Location` set to the stored URL, with bytes a
///   header cannot carry percent-encoded
/// - **404** `{"error": "URL no encontrada"}` for unknown identifiers
/// - **500** `{"error": "Error en el servidor"}` on store failure
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    let request = RequestInfo::new(method.as_str(), uri.path());

    let target = state.redirect_service.resolve(&short_id, &request).await?;

    let location = HeaderValue::from_str(&encode_location(&target)).map_err(|e| {
        state.reporter.report_error(&e, &request);
        AppError::internal(
            SERVER_ERROR,
            json!({ "short_id": short_id, "reason": e.to_string() }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
