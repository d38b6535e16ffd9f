//! Template Cache - query-keyed caching for resume template storage
//!
//! Wraps any `TemplateStorage` backend in a bounded, TTL-aware cache that
//! evicts the least-hit entries first, and serves the result over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheConfig, CacheStats, CachedStorage};
pub use config::Config;
pub use error::{Result, StorageError};
pub use service::TemplateService;
pub use storage::{HttpTemplateStorage, LocalTemplateStorage, TemplateStorage};
pub use tasks::spawn_cleanup_task;
