//! Repository trait for URL record data access.

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::StorageError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// No existence check is made first; uniqueness is left to the store.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Conflict`] if `short_id` is already stored.
    /// Returns [`StorageError::Database`] on any other persistence failure.
    async fn create(&self, short_id: &str, original_url: &str) -> Result<UrlRecord, StorageError>;

    /// Finds a record by exact `short_id` match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] on persistence failures.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError>;
}
