use crate::models::Operation;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a remote call issued by the cache did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The store rejected or failed the call
    #[error("{operation} of {path} failed: {source}")]
    Store {
        /// The call that failed
        operation: Operation,
        /// The collection or document addressed
        path: String,
        /// The store's own error
        source: BoxError,
    },

    /// The record could not be turned into a JSON document
    #[error("unable to encode {path} for {operation}: {source}")]
    Encode {
        /// The call that was about to be issued
        operation: Operation,
        /// The document addressed
        path: String,
        /// The serialization error
        source: serde_json::Error,
    },

    /// A background write was dropped before reporting its outcome
    #[error("{operation} of {path} was interrupted")]
    Interrupted {
        /// The call that was in flight
        operation: Operation,
        /// The document addressed
        path: String,
    },
}

impl SyncError {
    pub(crate) fn store(
        operation: Operation,
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            operation,
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The remote call this error is about.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Store { operation, .. }
            | Self::Encode { operation, .. }
            | Self::Interrupted { operation, .. } => *operation,
        }
    }

    /// The collection or document path this error is about.
    pub fn path(&self) -> &str {
        match self {
            Self::Store { path, .. } | Self::Encode { path, .. } | Self::Interrupted { path, .. } => {
                path
            }
        }
    }
}
