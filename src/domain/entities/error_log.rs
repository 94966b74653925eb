//! Error-log entity for operational failures.

use chrono::{DateTime, Utc};

/// A persisted handling failure, kept for operators to inspect.
///
/// The log is append-only. The service itself never reads these back; the
/// `admin errors` command does.
#[derive(Debug, Clone)]
pub struct ErrorLog {
    pub id: i64,
    pub message: String,
    pub stack: Option<String>,
    pub method: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

/// Input data for appending an error-log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewErrorLog {
    pub message: String,
    /// Error source chain, one cause per line. `None` when the error has no sources.
    pub stack: Option<String>,
    pub method: String,
    pub url: String,
}

impl NewErrorLog {
    /// Builds a record from an error, rendering its `source()` chain as the stack.
    pub fn from_error(
        err: &(dyn std::error::Error + 'static),
        method: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            message: err.to_string(),
            stack: render_source_chain(err),
            method: method.into(),
            url: url.into(),
        }
    }
}

fn render_source_chain(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    let mut lines = Vec::new();
    let mut current = err.source();

    while let Some(cause) = current {
        lines.push(format!("caused by: {cause}"));
        current = cause.source();
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
