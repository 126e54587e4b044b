use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The kind of remote call the cache issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Existence check of the collection root
    Exists,
    /// One-shot read of the collection root
    Read,
    /// Full overwrite of a document
    Write,
    /// Field-level merge onto a document
    Merge,
    /// Removal of a document
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exists => "exists",
            Self::Read => "read",
            Self::Write => "write",
            Self::Merge => "merge",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A remote call that did not succeed, as recorded in the cache's journal.
///
/// Failures are never raised to the caller of a fire-and-forget operation;
/// instead they are logged and kept here until drained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedOperation {
    /// What the cache attempted
    pub operation: Operation,
    /// The collection (`products`) or document (`products/42`) addressed
    pub path: String,
    /// A description of the error
    pub error: String,
    /// When the failure was observed
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}
