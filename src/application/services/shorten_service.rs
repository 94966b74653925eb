//! Short URL creation service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{error, info, warn};

use super::deadline::with_deadline;
use super::error_reporter::ErrorReporter;
use super::request_info::RequestInfo;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::error::{AppError, SERVER_ERROR, URL_REQUIRED};
use crate::utils::id_generator::IdGenerator;

/// Settings for [`ShortenService`].
#[derive(Debug, Clone)]
pub struct ShortenSettings {
    /// Prefix for built short URLs, e.g. `https://short.ly`.
    pub base_url: String,
    /// Deadline for each store call.
    pub store_timeout: Duration,
    /// Identifiers tried before a conflict becomes a failure.
    pub max_attempts: u32,
}

/// Result of a successful shorten call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_id: String,
    pub original_url: String,
    pub short_url: String,
}

/// Service for creating short URLs.
///
/// Uniqueness of identifiers is enforced by the store. A conflicting id is
/// replaced by a fresh one up to `max_attempts` times.
pub struct ShortenService {
    url_repository: Arc<dyn UrlRepository>,
    id_generator: Arc<dyn IdGenerator>,
    reporter: ErrorReporter,
    base_url: String,
    store_timeout: Duration,
    max_attempts: u32,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        id_generator: Arc<dyn IdGenerator>,
        reporter: ErrorReporter,
        settings: ShortenSettings,
    ) -> Self {
        Self {
            url_repository,
            id_generator,
            reporter,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            store_timeout: settings.store_timeout,
            max_attempts: settings.max_attempts.max(1),
        }
    }

    /// Stores `original_url` under a new identifier and returns its short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is absent or empty. Nothing
    /// is generated or stored in that case.
    ///
    /// Returns [`AppError::Internal`] on store failure, deadline expiry, or when
    /// every attempted identifier conflicted. These failures are also reported
    /// to the error log.
    pub async fn shorten(
        &self,
        original_url: Option<&str>,
        request: &RequestInfo,
    ) -> Result<ShortenedUrl, AppError> {
        let original_url = match original_url {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(AppError::bad_request(
                    URL_REQUIRED,
                    json!({ "field": "originalUrl" }),
                ));
            }
        };

        let record = match self.store_with_fresh_id(original_url).await {
            Ok(record) => record,
            Err(err) => {
                error!(error = %err, method = %request.method, url = %request.url, "Failed to shorten URL");
                self.reporter.report_error(&err, request);

                return Err(AppError::internal(
                    SERVER_ERROR,
                    json!({ "reason": err.to_string() }),
                ));
            }
        };

        let short_url = self.short_url_for(&record.short_id);
        info!(short_id = %record.short_id, "Short URL created");

        Ok(ShortenedUrl {
            short_id: record.short_id,
            original_url: record.original_url,
            short_url,
        })
    }

    /// Builds the public short URL for an identifier.
    pub fn short_url_for(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url, short_id)
    }

    async fn store_with_fresh_id(&self, original_url: &str) -> Result<UrlRecord, StorageError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let short_id = self.id_generator.generate();

            match with_deadline(
                self.store_timeout,
                self.url_repository.create(&short_id, original_url),
            )
            .await
            {
                Err(err) if err.is_conflict() && attempt < self.max_attempts => {
                    warn!(%short_id, attempt, "Short id collision, generating another");
                }
                result => return result,
            }
        }
    }
}
