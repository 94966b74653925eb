//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{
    ErrorReporter, RedirectService, ShortenService, ShortenSettings,
};
use crate::domain::repositories::{ErrorLogRepository, UrlRepository};
use crate::utils::id_generator::IdGenerator;

/// State cloned into every handler.
///
/// Built once at startup from explicitly constructed repositories; nothing
/// here is global.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    /// Error-log writer for failures raised in handlers rather than services.
    pub reporter: ErrorReporter,
}

impl AppState {
    /// Wires services over the given repositories.
    ///
    /// Both services share one [`ErrorReporter`] over `error_logs`, and every
    /// store call uses `settings.store_timeout` as its deadline.
    pub fn new(
        urls: Arc<dyn UrlRepository>,
        error_logs: Arc<dyn ErrorLogRepository>,
        id_generator: Arc<dyn IdGenerator>,
        settings: ShortenSettings,
    ) -> Self {
        let store_timeout = settings.store_timeout;
        let reporter = ErrorReporter::new(error_logs, store_timeout);

        let redirect_service = Arc::new(RedirectService::new(
            urls.clone(),
            reporter.clone(),
            store_timeout,
        ));
        let shorten_service = Arc::new(ShortenService::new(
            urls,
            id_generator,
            reporter.clone(),
            settings,
        ));

        Self {
            shorten_service,
            redirect_service,
            reporter,
        }
    }
}
