//! Bounded deadline for store operations.

use std::future::Future;
use std::time::Duration;

use crate::domain::repositories::StorageError;

/// Runs a store operation, failing with [`StorageError::Timeout`] once `deadline` elapses.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, StorageError>
where
    F: Future<Output = Result<T, StorageError>>,
{
    tokio::time::timeout(deadline, operation)
        .await
        .map_err(|_| StorageError::Timeout(deadline))?
}
