//! Application configuration management.
//!
//! This module handles loading and merging configuration from multiple sources
//! with a clear precedence order. Configuration can come from default values,
//! configuration files, and environment variables.

use crate::{Cli, SeedConfig};
use serde::{Deserialize, Serialize};

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Database configuration (file path, creation, busy timeout)
    #[serde(default)]
    pub database: shelf_sqlite::config::SqliteConfig,

    /// Product cache configuration (collection name, seed barrier)
    #[serde(default)]
    pub cache: shelf_core::CacheConfig,

    /// Seed catalog configuration
    #[serde(default)]
    pub seed: SeedConfig,

    /// Storefront view configuration
    #[serde(default)]
    pub views: ViewConfig,
}

/// Parameters of the storefront views.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    /// The minimum rating for the best-seller view
    #[serde(default = "default_bestseller_min_rating")]
    pub bestseller_min_rating: f64,
}

fn default_bestseller_min_rating() -> f64 {
    4.5
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            bestseller_min_rating: default_bestseller_min_rating(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given by the CLI
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern:
    /// `APP_<SECTION>__<KEY>` maps to `<section>.<key>`
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Keep products in a file instead of memory
    /// export APP_DATABASE__DATABASE_PATH="products.db"
    ///
    /// # Mirror a different collection
    /// export APP_CACHE__COLLECTION="catalog"
    ///
    /// # Lower the best-seller threshold
    /// export APP_VIEWS__BESTSELLER_MIN_RATING="4.0"
    /// ```
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Start with default values
        config = config.add_source(config::Config::try_from(&Self::default())?);

        // Layer on config file if it is specified and exists
        if let Some(path) = &cli.config {
            if path.exists() {
                config = config.add_source(config::File::from(path.as_path()))
            } else {
                return Err(anyhow::anyhow!(
                    "Config file {} does not exist",
                    path.display()
                ));
            }
        }

        // Override with environment variables
        // This maps APP_CACHE__COLLECTION to cache.collection
        config = config.add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
