//! Cache Module
//!
//! Bounded, TTL-aware, hit-count-prioritized caching in front of any
//! `TemplateStorage` backend.

mod config;
mod decorator;
mod entry;
mod eviction;
mod key;
mod stats;
mod store;


// Re-export public types
pub use config::{CacheConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};
pub use decorator::CachedStorage;
pub use entry::{CacheEntry, Cacheable, CachedValue};
pub use key::{CacheKey, Operation, ALL_PARAM};
pub use stats::CacheStats;
pub use store::CacheStore;
