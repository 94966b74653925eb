//! Failures reported by record stores.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing record is not an error: lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The short identifier is already taken.
    #[error("short id already exists: {short_id}")]
    Conflict { short_id: String },

    /// The operation did not finish within the store deadline.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure of the underlying database.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Returns true for a unique-key collision on the short identifier.
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_detection() {
        let err = StorageError::Conflict {
            short_id: "abc123".to_string(),
        };
        assert!(err.is_conflict());
        assert!(err.to_string().contains("abc123"));

        let err = StorageError::Timeout(Duration::from_millis(50));
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_database_error_keeps_source() {
        use std::error::Error as _;

        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "database error");
        assert!(err.source().is_some());
    }
}
