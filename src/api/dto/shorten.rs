//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `originalUrl` may be absent or `null`; the service rejects both as a
/// missing URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "originalUrl", default)]
    pub original_url: Option<String>,
}

/// Response containing the created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
