//! URL record entity.

use chrono::{DateTime, Utc};

/// A stored mapping between a short identifier and the URL it stands for.
///
/// Records are immutable once created: there are no update or delete
/// operations anywhere in the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
        }
    }
}
