//! Best-effort persistence of request failures.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::deadline::with_deadline;
use super::request_info::RequestInfo;
use crate::domain::entities::NewErrorLog;
use crate::domain::repositories::ErrorLogRepository;

/// Writes error-log records on detached tasks.
///
/// A report never blocks or fails its caller. If the append fails or misses
/// the deadline, the failure is logged at WARN and the record is dropped.
#[derive(Clone)]
pub struct ErrorReporter {
    sink: Arc<dyn ErrorLogRepository>,
    deadline: Duration,
}

impl ErrorReporter {
    /// Creates a reporter writing to `sink`, giving each append `deadline` to finish.
    pub fn new(sink: Arc<dyn ErrorLogRepository>, deadline: Duration) -> Self {
        Self { sink, deadline }
    }

    /// Spawns the append of `record`.
    ///
    /// The returned handle resolves once the attempt is over, successful or not.
    /// Request paths drop it.
    pub fn report(&self, record: NewErrorLog) -> JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        let deadline = self.deadline;

        tokio::spawn(async move {
            let method = record.method.clone();
            let url = record.url.clone();

            match with_deadline(deadline, sink.append(record)).await {
                Ok(()) => debug!(%method, %url, "Error log persisted"),
                Err(e) => warn!(error = %e, %method, %url, "Failed to persist error log"),
            }
        })
    }

    /// Reports `err` as a failure of `request`.
    pub fn report_error(
        &self,
        err: &(dyn std::error::Error + 'static),
        request: &RequestInfo,
    ) -> JoinHandle<()> {
        self.report(NewErrorLog::from_error(
            err,
            request.method.clone(),
            request.url.clone(),
        ))
    }
}
