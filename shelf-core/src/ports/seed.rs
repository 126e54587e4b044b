use crate::models::ProductEntry;
use std::sync::Arc;

/// A fixed catalog used to populate an absent remote collection.
///
/// The catalog is consulted at most once per cache, and only when the remote
/// collection has no documents at all.
pub trait SeedSource: Send + Sync {
    /// The seed entries, in the order they should be written.
    fn entries(&self) -> &[ProductEntry];
}

impl SeedSource for Vec<ProductEntry> {
    fn entries(&self) -> &[ProductEntry] {
        self
    }
}

impl<const N: usize> SeedSource for [ProductEntry; N] {
    fn entries(&self) -> &[ProductEntry] {
        self
    }
}

impl<T: SeedSource + ?Sized> SeedSource for &T {
    fn entries(&self) -> &[ProductEntry] {
        (**self).entries()
    }
}

impl<T: SeedSource + ?Sized> SeedSource for Arc<T> {
    fn entries(&self) -> &[ProductEntry] {
        (**self).entries()
    }
}
