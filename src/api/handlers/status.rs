//! Handler for the liveness endpoint.

use axum::Json;

use crate::api::dto::status::{SERVER_RUNNING, StatusResponse};

/// Reports that the server is up.
///
/// `GET /` → `200 {"message": "Servidor funcionando"}`. The store is not
/// consulted.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: SERVER_RUNNING.to_string(),
    })
}
