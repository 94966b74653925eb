//! PostgreSQL implementation of the error-log sink.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ErrorLog, NewErrorLog};
use crate::domain::repositories::{ErrorLogRepository, StorageError};

#[derive(sqlx::FromRow)]
struct ErrorLogRow {
    id: i64,
    message: String,
    stack: Option<String>,
    method: String,
    url: String,
    timestamp: DateTime<Utc>,
}

impl From<ErrorLogRow> for ErrorLog {
    fn from(row: ErrorLogRow) -> Self {
        ErrorLog {
            id: row.id,
            message: row.message,
            stack: row.stack,
            method: row.method,
            url: row.url,
            timestamp: row.timestamp,
        }
    }
}

/// PostgreSQL repository for error-log records.
///
/// The service only appends. [`Self::list_recent`] and [`Self::count`] exist
/// for the `admin` binary.
pub struct PgErrorLogRepository {
    pool: Arc<PgPool>,
}

impl PgErrorLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Returns the newest records first, at most `limit` of them.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<ErrorLog>, StorageError> {
        let rows = sqlx::query_as::<_, ErrorLogRow>(
            r#"
            SELECT id, message, stack, method, url, timestamp
            FROM error_logs
            ORDER BY timestamp DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Counts stored error-log records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM error_logs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ErrorLogRepository for PgErrorLogRepository {
    async fn append(&self, record: NewErrorLog) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO error_logs (message, stack, method, url)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(record.message)
        .bind(record.stack)
        .bind(record.method)
        .bind(record.url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
