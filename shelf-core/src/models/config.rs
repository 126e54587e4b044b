use serde::{Deserialize, Serialize};

/// Settings for a [`ProductCache`](crate::ProductCache).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// The remote collection that holds the product documents
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Whether `init` waits for every seed write to be acknowledged before
    /// reading the collection back. When false, the read-back may observe a
    /// partial seed set.
    #[serde(default = "default_true")]
    pub await_seed_writes: bool,
}

fn default_collection() -> String {
    "products".to_owned()
}

fn default_true() -> bool {
    true
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            collection: default_collection(),
            await_seed_writes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: CacheConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CacheConfig::default());
        assert_eq!(config.collection, "products");
        assert!(config.await_seed_writes);
    }
}
