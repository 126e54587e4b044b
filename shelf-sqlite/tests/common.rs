#![allow(dead_code)]

use shelf_core::models::{ProductEntry, ProductRecord};
use shelf_sqlite::{Db, config::SqliteConfig};

pub const COLLECTION: &str = "products";

pub async fn open() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn catalog() -> Vec<ProductEntry> {
    vec![
        ProductEntry::new(
            "tv-55",
            ProductRecord::new("electronics", 4.6)
                .with_detail("name", "55\" television")
                .with_detail("price", 499.0),
        ),
        ProductEntry::new(
            "tee-basic",
            ProductRecord::new("clothing", 3.8)
                .with_detail("name", "Basic tee")
                .with_detail("price", 12.5),
        ),
        ProductEntry::new(
            "apples-1kg",
            ProductRecord::new("groceries", 4.9)
                .with_detail("name", "Apples, 1kg")
                .with_detail("price", 3.2),
        ),
    ]
}
