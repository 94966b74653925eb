//! DTO for the liveness endpoint.

use serde::Serialize;

/// Message returned by the liveness probe.
pub const SERVER_RUNNING: &str = "Servidor funcionando";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}
