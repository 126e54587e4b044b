use crate::models::Map;
use serde_json::Value;

/// Interface to the remote key-value document store.
///
/// The store holds named collections; each collection maps a key to a JSON
/// document. A collection with no documents is indistinguishable from one
/// that was never created, which is what the cache relies on to decide
/// whether to seed.
///
/// Handles are cloned into background tasks for fire-and-forget writes, so
/// implementations should be cheap to clone (e.g. a pool or an `Arc`).
pub trait RemoteStore: Clone + Send + Sync + 'static {
    /// An error type for the underlying implementation
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check whether the collection has at least one document.
    fn exists(&self, collection: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Read every document in the collection.
    ///
    /// # Returns
    ///
    /// Ok(Some(map)) of key to document if the collection exists,
    /// Ok(None) if it has no documents.
    fn read(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<Option<Map<String, Value>>, Self::Error>> + Send;

    /// Store `value` under `key`, replacing any existing document.
    fn write(
        &self,
        collection: &str,
        key: &str,
        value: Value,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Merge the top-level fields of `partial` into the document under `key`,
    /// creating the document if it does not exist. A `null` field removes the
    /// corresponding field from the document.
    fn merge(
        &self,
        collection: &str,
        key: &str,
        partial: Value,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Remove the document under `key`. Removing a missing document succeeds.
    fn delete(&self, collection: &str, key: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
