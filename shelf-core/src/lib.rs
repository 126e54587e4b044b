#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

/// Core domain models for the product cache.
///
/// This module contains the records exchanged with the remote store and the
/// small amount of logic needed to interpret them (field-level merges,
/// configuration defaults, failure journal entries).
pub mod models;

/// Interface traits for the product cache.
///
/// These traits define the contract between the cache and its external
/// collaborators (the remote document store and the seed catalog) without
/// specifying implementation details. A reference SQLite implementation of
/// [`ports::RemoteStore`] lives in the `shelf-sqlite` crate.
pub mod ports;

/// The product cache and its per-operation outcome types.
pub mod cache;

mod error;

pub use cache::{InitReport, PendingWrite, ProductCache, SyncOutcome};
pub use error::SyncError;
pub use models::CacheConfig;
