mod config;
mod document;
mod failure;
mod map;
mod product;

pub use config::CacheConfig;
pub use document::{document_path, merge_document};
pub use failure::{FailedOperation, Operation};
pub use map::Map;
pub use product::{ProductEntry, ProductId, ProductRecord};
