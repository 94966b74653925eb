//! Short identifier resolution service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, error};

use super::deadline::with_deadline;
use super::error_reporter::ErrorReporter;
use super::request_info::RequestInfo;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, SERVER_ERROR, URL_NOT_FOUND};
use crate::utils::id_generator::is_well_formed;

/// Service for resolving short identifiers to their original URLs.
///
/// Lookups never modify the store. The returned URL is not validated before
/// it is used as a redirect target.
pub struct RedirectService {
    url_repository: Arc<dyn UrlRepository>,
    reporter: ErrorReporter,
    store_timeout: Duration,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        reporter: ErrorReporter,
        store_timeout: Duration,
    ) -> Self {
        Self {
            url_repository,
            reporter,
            store_timeout,
        }
    }

    /// Returns the original URL stored under `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists. This is ordinary
    /// traffic and is not written to the error log. Identifiers that could
    /// never have been generated are rejected the same way without a lookup.
    ///
    /// Returns [`AppError::Internal`] on store failure or deadline expiry,
    /// after reporting the failure to the error log.
    pub async fn resolve(&self, short_id: &str, request: &RequestInfo) -> Result<String, AppError> {
        if !is_well_formed(short_id) {
            debug!(%short_id, "Malformed short id");
            return Err(not_found(short_id));
        }

        let lookup = with_deadline(
            self.store_timeout,
            self.url_repository.find_by_short_id(short_id),
        )
        .await;

        match lookup {
            Ok(Some(record)) => {
                debug!(%short_id, "Short id resolved");
                Ok(record.original_url)
            }
            Ok(None) => Err(not_found(short_id)),
            Err(err) => {
                error!(error = %err, %short_id, "Failed to resolve short id");
                self.reporter.report_error(&err, request);

                Err(AppError::internal(
                    SERVER_ERROR,
                    json!({ "short_id": short_id, "reason": err.to_string() }),
                ))
            }
        }
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found(URL_NOT_FOUND, json!({ "short_id": short_id }))
}
