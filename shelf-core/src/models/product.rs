use crate::models::Map;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The key under which a product is stored in the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// View the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ProductId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The document stored for a single product.
///
/// Only `category` and `rating` carry meaning for the cache; every other
/// field (name, price, image, ...) is preserved verbatim in `details`.
/// Documents missing either known field, or holding it with an unexpected
/// JSON type, are accepted: the category falls back to the empty string and
/// the rating to zero. A rating stored as a numeric string is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The category used by the category views (e.g. "electronics")
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: String,
    /// The customer rating, nominally between 0 and 5 inclusive
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: f64,
    /// Descriptive fields that are opaque to the cache
    #[serde(flatten)]
    pub details: Map<String>,
}

impl ProductRecord {
    /// Create a record with no descriptive fields.
    pub fn new(category: impl Into<String>, rating: f64) -> Self {
        Self {
            category: category.into(),
            rating,
            details: Map::new(),
        }
    }

    /// Attach a descriptive field, replacing any previous value under `key`.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

fn lenient_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(category) => category,
        _ => String::new(),
    })
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let rating = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(rating.filter(|rating: &f64| rating.is_finite()).unwrap_or_default())
}

/// A cached product: the remote key paired with its document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    /// The key of the document in the remote collection
    pub id: ProductId,
    /// The product document
    pub data: ProductRecord,
}

impl ProductEntry {
    /// Pair an id with a record.
    pub fn new(id: impl Into<ProductId>, data: ProductRecord) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
