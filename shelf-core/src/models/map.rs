use std::hash::Hash;

/// A wrapper around an insertion-ordered map, defaulting to JSON values.
///
/// Collection snapshots and the free-form fields of a product are kept in the
/// order the store reports them, so repeated hydrations of the same remote
/// state produce identical caches. We use indexmap::IndexMap instead of
/// std::collections::HashMap for this, but wrap it in a newtype so the
/// backing map remains an implementation detail.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map<K: Eq + Hash, V = serde_json::Value>(
    indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>,
);

impl<K: Eq + Hash, V> Map<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self(indexmap::IndexMap::default())
    }
}

impl<K: Eq + Hash, V> std::ops::Deref for Map<K, V> {
    type Target = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K: Eq + Hash, V> std::ops::DerefMut for Map<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Eq + Hash, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(indexmap::IndexMap::from_iter(iter))
    }
}
