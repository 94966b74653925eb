//! Repository trait for the error-log sink.

use crate::domain::entities::NewErrorLog;
use crate::domain::repositories::StorageError;
use async_trait::async_trait;

/// Append-only sink for request handling failures.
///
/// Callers treat appends as best-effort; see
/// [`crate::application::services::ErrorReporter`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ErrorLogRepository: Send + Sync {
    /// Appends one record.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on persistence failures.
    async fn append(&self, record: NewErrorLog) -> Result<(), StorageError>;
}
