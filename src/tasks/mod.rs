//! Background maintenance for the cache.
//!
//! - TTL cleanup: periodic `clear_expired` on a shared `CachedStorage`

mod cleanup;

pub use cleanup::spawn_cleanup_task;
