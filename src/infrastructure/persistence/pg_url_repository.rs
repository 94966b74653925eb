//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StorageError, UrlRepository};
use crate::utils::db_error::is_unique_violation_on_short_id;

#[derive(sqlx::FromRow)]
struct UrlRow {
    short_id: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.short_id, row.original_url, row.created_at)
    }
}

/// PostgreSQL repository for URL records.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Counts stored URL records.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, short_id: &str, original_url: &str) -> Result<UrlRecord, StorageError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (short_id, original_url)
            VALUES ($1, $2)
            RETURNING short_id, original_url, created_at
            "#,
        )
        .bind(short_id)
        .bind(original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_short_id(&e) {
                StorageError::Conflict {
                    short_id: short_id.to_string(),
                }
            } else {
                StorageError::Database(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<UrlRecord>, StorageError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT short_id, original_url, created_at
            FROM urls
            WHERE short_id = $1
            "#,
        )
        .bind(short_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}
