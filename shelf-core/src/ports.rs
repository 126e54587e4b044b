mod seed;
mod store;

pub use seed::SeedSource;
pub use store::RemoteStore;
