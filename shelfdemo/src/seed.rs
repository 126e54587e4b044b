//! The catalog used to seed an empty product collection.

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use shelf_core::models::ProductEntry;
use std::{fs::File, io::BufReader, path::PathBuf};

const CATALOG: &str = include_str!("../seed/catalog.json");

/// Where the seed catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// A JSON file holding an array of `{ "id": ..., "data": { ... } }`
    /// entries. If None, the built-in catalog is used.
    pub path: Option<PathBuf>,
}

impl SeedConfig {
    /// Read the configured catalog.
    pub fn load(&self) -> anyhow::Result<Vec<ProductEntry>> {
        let Some(path) = &self.path else {
            return builtin_catalog();
        };

        let file = File::open(path)
            .with_context(|| format!("unable to open seed catalog {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("malformed seed catalog {}", path.display()))
    }
}

/// The catalog shipped with the demo.
pub fn builtin_catalog() -> anyhow::Result<Vec<ProductEntry>> {
    serde_json::from_str(CATALOG).context("malformed built-in catalog")
}
