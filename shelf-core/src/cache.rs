use crate::{
    CacheConfig, SyncError,
    models::{FailedOperation, Map, Operation, ProductEntry, ProductId, ProductRecord, document_path},
    ports::{RemoteStore, SeedSource},
};
use serde_json::Value;
use tokio::task::JoinSet;
use tracing::{Instrument as _, Level, event, span};

mod journal;
mod pending;

use journal::Journal;
pub use pending::PendingWrite;

/// What a call to [`ProductCache::init`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitReport {
    /// The cache was already populated or initialized; nothing was done
    Skipped,
    /// The bootstrap ran
    Completed {
        /// Number of seed writes issued (zero if the collection existed)
        seeded: usize,
        /// Number of entries loaded into the cache by the read-back
        hydrated: usize,
    },
}

/// The result of a remote-first mutation (update or delete).
///
/// Callers are free to ignore it: every failure is also logged and kept in
/// the cache's failure journal.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The store acknowledged the call and the local entry was changed
    Applied,
    /// The store acknowledged the call but no cached entry has that id
    NotCached,
    /// The store call failed; the cache was not touched
    RemoteFailed(SyncError),
}

impl SyncOutcome {
    /// True if both the remote and the local step took effect.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The remote failure, if any.
    pub fn error(&self) -> Option<&SyncError> {
        match self {
            Self::RemoteFailed(err) => Some(err),
            _ => None,
        }
    }
}

/// A local, ordered mirror of the product collection held by a remote store.
///
/// The cache is an explicit context object: construct one per process (or per
/// view model) and pass it to whatever needs product data. Mutations take
/// `&mut self`, so local state is only ever changed by its single owner; the
/// only concurrency is the background writes started by
/// [`add_product`](Self::add_product) and by seeding, which run as tokio
/// tasks holding a clone of the store.
///
/// Consistency contract:
/// - `add_product` changes the cache immediately and writes to the store in
///   the background, never rolling back the local append.
/// - `update_product` and `delete_product` change the cache only after the
///   store acknowledges the call.
/// - Any divergence is resolved by the next [`fetch`](Self::fetch).
pub struct ProductCache<S: RemoteStore, D: SeedSource = Vec<ProductEntry>> {
    store: S,
    seed: D,
    config: CacheConfig,
    products: Vec<ProductEntry>,
    initialized: bool,
    background: JoinSet<()>,
    journal: Journal,
}

impl<S: RemoteStore, D: SeedSource> ProductCache<S, D> {
    /// Create an empty, uninitialized cache.
    pub fn new(store: S, seed: D, config: CacheConfig) -> Self {
        Self {
            store,
            seed,
            config,
            products: Vec::new(),
            initialized: false,
            background: JoinSet::new(),
            journal: Journal::default(),
        }
    }

    /// The cached products, in collection order.
    pub fn products(&self) -> &[ProductEntry] {
        &self.products
    }

    /// Whether `init` has run to completion.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// The underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Bootstrap the cache from the remote collection, seeding it first if it
    /// does not exist.
    ///
    /// Safe to call repeatedly: once the cache holds products or a previous
    /// call completed, this returns [`InitReport::Skipped`] without touching
    /// the store. A collection that exists but was emptied by deletions is
    /// never re-seeded by the same cache.
    pub async fn init(&mut self) -> InitReport {
        if !self.products.is_empty() || self.initialized {
            event!(Level::DEBUG, collection = %self.config.collection, "already initialized");
            return InitReport::Skipped;
        }

        let span = span!(Level::INFO, "init", collection = %self.config.collection);
        async {
            let seeded = match self.store.exists(&self.config.collection).await {
                Ok(true) => 0,
                Ok(false) => self.seed_collection().await,
                Err(err) => {
                    // an unanswered existence check never triggers seeding
                    let err = SyncError::store(Operation::Exists, &self.config.collection, err);
                    self.journal.record(&err);
                    0
                }
            };

            // A failed read-back is already journaled by fetch.
            let hydrated = self.fetch().await.unwrap_or_default();
            self.initialized = true;

            event!(Level::INFO, seeded, hydrated, "cache initialized");
            InitReport::Completed { seeded, hydrated }
        }
        .instrument(span)
        .await
    }

    /// Replace the cache with a fresh read of the remote collection.
    ///
    /// An absent collection empties the cache. Documents that are not JSON
    /// objects are skipped. If the read fails, the cache is left as it was.
    ///
    /// # Returns
    ///
    /// The number of cached entries after hydration.
    pub async fn fetch(&mut self) -> Result<usize, SyncError> {
        let collection = &self.config.collection;
        let snapshot = match self.store.read(collection).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let err = SyncError::store(Operation::Read, collection, err);
                self.journal.record(&err);
                return Err(err);
            }
        };

        self.products = snapshot
            .map(|documents| hydrate(collection, documents))
            .unwrap_or_default();

        event!(
            Level::DEBUG,
            collection = collection.as_str(),
            count = self.products.len(),
            "hydrated from remote"
        );
        Ok(self.products.len())
    }

    /// Every cached entry whose category equals `category` exactly.
    pub fn filter_by_category(&self, category: &str) -> Vec<&ProductEntry> {
        self.products
            .iter()
            .filter(|entry| entry.data.category == category)
            .collect()
    }

    /// Every cached entry rated at least `min_rating`.
    pub fn filter_by_rating(&self, min_rating: f64) -> Vec<&ProductEntry> {
        self.products
            .iter()
            .filter(|entry| entry.data.rating >= min_rating)
            .collect()
    }

    /// Append `entry` to the cache and write it to the store in the background.
    ///
    /// The local append always happens, whatever the store later reports. The
    /// remote write overwrites any existing document under the same id.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn add_product(&mut self, entry: ProductEntry) -> PendingWrite {
        let pending = self.spawn_write(&entry);
        self.products.push(entry);
        pending
    }

    /// Merge `updated.data` onto the remote document `id`, then replace the
    /// cached data of that entry in place. Details set to `null` are dropped
    /// from the cached copy, as the merge drops them from the document.
    ///
    /// If the merge fails the cache is left untouched. If the merge succeeds
    /// but no cached entry has that id, the remote change stands and the
    /// outcome is [`SyncOutcome::NotCached`].
    pub async fn update_product(&mut self, id: &ProductId, updated: ProductEntry) -> SyncOutcome {
        let collection = &self.config.collection;
        let path = document_path(collection, id);

        let patch = match serde_json::to_value(&updated.data) {
            Ok(patch) => patch,
            Err(source) => {
                return self.fail(SyncError::Encode {
                    operation: Operation::Merge,
                    path,
                    source,
                });
            }
        };

        if let Err(err) = self.store.merge(collection, id, patch).await {
            return self.fail(SyncError::store(Operation::Merge, path, err));
        }

        match self.products.iter_mut().find(|entry| entry.id == *id) {
            Some(entry) => {
                let mut data = updated.data;
                // null removed the field remotely
                data.details.retain(|_, value| !value.is_null());
                entry.data = data;
                SyncOutcome::Applied
            }
            None => {
                event!(Level::WARN, path = path.as_str(), "updated product is not cached");
                SyncOutcome::NotCached
            }
        }
    }

    /// Delete the remote document `id`, then drop the matching entry from the
    /// cache, keeping the order of the remaining entries.
    ///
    /// If the delete fails the entry stays cached.
    pub async fn delete_product(&mut self, id: &ProductId) -> SyncOutcome {
        let collection = &self.config.collection;
        let path = document_path(collection, id);

        if let Err(err) = self.store.delete(collection, id).await {
            return self.fail(SyncError::store(Operation::Delete, path, err));
        }

        let before = self.products.len();
        self.products.retain(|entry| entry.id != *id);

        if self.products.len() == before {
            event!(Level::WARN, path = path.as_str(), "deleted product is not cached");
            SyncOutcome::NotCached
        } else {
            SyncOutcome::Applied
        }
    }

    /// Wait for every background write to finish.
    ///
    /// # Returns
    ///
    /// The number of background tasks that were awaited.
    pub async fn settle(&mut self) -> usize {
        let mut settled = 0;
        while let Some(result) = self.background.join_next().await {
            if let Err(err) = result {
                event!(Level::WARN, err = err.to_string(), "background write aborted");
            }
            settled += 1;
        }
        settled
    }

    /// The number of background writes not yet reaped.
    pub fn pending_writes(&self) -> usize {
        self.background.len()
    }

    /// Every remote failure observed so far.
    pub fn failures(&self) -> Vec<FailedOperation> {
        self.journal.snapshot()
    }

    /// Remove and return every remote failure observed so far.
    pub fn take_failures(&mut self) -> Vec<FailedOperation> {
        self.journal.drain()
    }

    fn fail(&self, err: SyncError) -> SyncOutcome {
        self.journal.record(&err);
        SyncOutcome::RemoteFailed(err)
    }

    async fn seed_collection(&mut self) -> usize {
        let entries = self.seed.entries().to_vec();
        event!(Level::INFO, count = entries.len(), "collection absent, seeding");

        let pending: Vec<_> = entries.iter().map(|entry| self.spawn_write(entry)).collect();
        let seeded = pending.len();

        if self.config.await_seed_writes {
            for write in pending {
                // failures are journaled by the task itself
                let _ = write.outcome().await;
            }
        }

        seeded
    }

    fn spawn_write(&mut self, entry: &ProductEntry) -> PendingWrite {
        self.reap();

        let collection = self.config.collection.clone();
        let key = entry.id.to_string();
        let path = document_path(&collection, &key);
        let (pending, sender) = PendingWrite::new(path.clone());

        match serde_json::to_value(&entry.data) {
            Ok(value) => {
                let store = self.store.clone();
                let journal = self.journal.clone();
                self.background.spawn(async move {
                    let outcome = store
                        .write(&collection, &key, value)
                        .await
                        .map_err(|err| SyncError::store(Operation::Write, path, err));
                    if let Err(err) = &outcome {
                        journal.record(err);
                    }
                    // the caller may have dropped the handle
                    let _ = sender.send(outcome);
                });
            }
            Err(source) => {
                let err = SyncError::Encode {
                    operation: Operation::Write,
                    path,
                    source,
                };
                self.journal.record(&err);
                let _ = sender.send(Err(err));
            }
        }

        pending
    }

    fn reap(&mut self) {
        while let Some(result) = self.background.try_join_next() {
            if let Err(err) = result {
                event!(Level::WARN, err = err.to_string(), "background write aborted");
            }
        }
    }
}

fn hydrate(collection: &str, documents: Map<String, Value>) -> Vec<ProductEntry> {
    documents
        .into_iter()
        .filter_map(|(key, document)| {
            match serde_json::from_value::<ProductRecord>(document) {
                Ok(data) => Some(ProductEntry {
                    id: key.into(),
                    data,
                }),
                Err(err) => {
                    event!(
                        Level::WARN,
                        collection,
                        key = key.as_str(),
                        err = err.to_string(),
                        "skipping malformed product"
                    );
                    None
                }
            }
        })
        .collect()
}
