use crate::{SyncError, models::Operation};
use tokio::sync::oneshot;

/// Handle to a remote write that was started in the background.
///
/// Dropping the handle does not cancel the write; the outcome is still
/// journaled by the cache. Awaiting [`PendingWrite::outcome`] lets a caller
/// observe the acknowledgment (or the failure) of this particular write.
#[derive(Debug)]
pub struct PendingWrite {
    path: String,
    receiver: oneshot::Receiver<Result<(), SyncError>>,
}

impl PendingWrite {
    pub(crate) fn new(path: String) -> (Self, oneshot::Sender<Result<(), SyncError>>) {
        let (sender, receiver) = oneshot::channel();
        (Self { path, receiver }, sender)
    }

    /// The document this write targets (`collection/key`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Wait for the store to acknowledge or reject the write.
    pub async fn outcome(self) -> Result<(), SyncError> {
        match self.receiver.await {
            Ok(result) => result,
            Err(_) => Err(SyncError::Interrupted {
                operation: Operation::Write,
                path: self.path,
            }),
        }
    }
}
