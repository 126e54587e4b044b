use crate::{SyncError, models::FailedOperation};
use std::sync::{Arc, Mutex, PoisonError};
use time::OffsetDateTime;
use tracing::{Level, event};

/// Shared record of failed remote calls.
///
/// Background writes hold a clone and append to it when the store reports an
/// error, so the owning cache can surface failures after the fact.
#[derive(Clone, Default)]
pub(crate) struct Journal(Arc<Mutex<Vec<FailedOperation>>>);

impl Journal {
    /// Log the error and keep a copy of it.
    pub(crate) fn record(&self, err: &SyncError) {
        event!(
            Level::ERROR,
            operation = %err.operation(),
            path = err.path(),
            err = err.to_string(),
            "remote operation failed"
        );

        let failure = FailedOperation {
            operation: err.operation(),
            path: err.path().to_owned(),
            error: err.to_string(),
            at: OffsetDateTime::now_utc(),
        };
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }

    pub(crate) fn snapshot(&self) -> Vec<FailedOperation> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn drain(&self) -> Vec<FailedOperation> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
