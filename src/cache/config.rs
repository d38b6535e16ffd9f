//! Cache configuration, fixed at construction time.

use std::time::Duration;

use crate::error::{Result, StorageError};

/// Default bound on simultaneous cache entries
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default time-to-live (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

// == Cache Config ==
/// Immutable cache configuration.
///
/// Fields are private so a constructed config always satisfies
/// `max_entries > 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    max_entries: usize,
    ttl: Duration,
    stats_enabled: bool,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns `StorageError::InvalidConfig` when `max_entries` is zero.
    pub fn new(max_entries: usize, ttl: Duration, stats_enabled: bool) -> Result<Self> {
        if max_entries == 0 {
            return Err(StorageError::InvalidConfig(
                "max_entries must be a positive integer".to_string(),
            ));
        }

        Ok(Self {
            max_entries,
            ttl,
            stats_enabled,
        })
    }

    /// Same as `new`, with the TTL given in milliseconds.
    pub fn from_millis(max_entries: usize, ttl_ms: u64, stats_enabled: bool) -> Result<Self> {
        Self::new(max_entries, Duration::from_millis(ttl_ms), stats_enabled)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stats_enabled(&self) -> bool {
        self.stats_enabled
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            ttl: Duration::from_millis(DEFAULT_TTL_MS),
            stats_enabled: false,
        }
    }
}
