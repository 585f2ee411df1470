//! Translation cache: key types, store contract, and `SQLite` backend.

mod sqlite;
mod store;

pub use sqlite::SqliteCacheStore;
pub use store::{CacheKey, CacheStatusReport, CacheStore, FlowContext, NullCacheStore};
