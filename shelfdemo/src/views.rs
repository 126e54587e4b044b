//! The storefront views, each a fixed query over the product cache.

use crate::ViewConfig;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shelf_core::{
    ProductCache,
    models::ProductEntry,
    ports::{RemoteStore, SeedSource},
};

/// A named page of the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Products rated at or above the configured best-seller threshold
    Bestseller,
    /// The clothing category
    Clothing,
    /// The electronics category
    Electronics,
    /// The groceries category
    Groceries,
    /// Every product
    Home,
}

impl View {
    /// The products this view shows, in cache order.
    pub fn select<'a, S: RemoteStore, D: SeedSource>(
        self,
        cache: &'a ProductCache<S, D>,
        config: &ViewConfig,
    ) -> Vec<&'a ProductEntry> {
        match self {
            Self::Bestseller => cache.filter_by_rating(config.bestseller_min_rating),
            Self::Clothing => cache.filter_by_category("clothing"),
            Self::Electronics => cache.filter_by_category("electronics"),
            Self::Groceries => cache.filter_by_category("groceries"),
            Self::Home => cache.products().iter().collect(),
        }
    }
}
