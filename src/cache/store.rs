//! Cache Store Module
//!
//! Bounded key-value map with TTL freshness checks, hit-count eviction and
//! counters. Synchronous; `CachedStorage` guards it with a lock.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::eviction::select_victim;
use crate::cache::{CacheConfig, CacheEntry, CacheKey, CacheStats, CachedValue};

// == Cache Store ==
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    config: CacheConfig,
    /// Next insertion sequence number
    next_sequence: u64,
}

impl CacheStore {
    // == Constructor ==
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: HashMap::with_capacity(config.max_entries()),
            stats: CacheStats::new(),
            config,
            next_sequence: 0,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Lookup ==
    /// Returns the cached value if the entry exists and is still fresh.
    ///
    /// A fresh lookup counts as a hit and bumps the entry's hit count. Absent
    /// and stale entries return None without touching any counter; the miss
    /// is recorded by `insert` once the backend has answered. Stale entries
    /// stay in place until they are replaced or cleared.
    pub fn lookup(&mut self, key: &CacheKey) -> Option<CachedValue> {
        let ttl = self.config.ttl();
        let entry = self.entries.get_mut(key.as_str())?;
        if !entry.is_fresh(ttl) {
            return None;
        }

        entry.record_hit();
        self.stats.record_hit();
        if self.config.stats_enabled() {
            debug!(key = %key, hit_count = entry.hit_count, "cache hit");
        }
        Some(entry.value.clone())
    }

    // == Insert ==
    /// Records a miss and stores a freshly fetched value.
    ///
    /// If the key is new and the cache is full, exactly one entry is evicted
    /// first. An existing entry for the key is replaced with a zero hit count.
    pub fn insert(&mut self, key: CacheKey, value: CachedValue) {
        self.stats.record_miss();
        if self.config.stats_enabled() {
            debug!(key = %key, "cache miss");
        }

        let key = key.into_string();
        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.max_entries() {
            self.evict_one();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(key, CacheEntry::new(value, sequence));
        self.stats.set_current_size(self.entries.len());
    }

    // == Evict One ==
    /// Removes the entry with the fewest hits (oldest first on ties).
    ///
    /// Returns the evicted key, or None if the cache was empty.
    fn evict_one(&mut self) -> Option<String> {
        let victim = select_victim(&self.entries).map(str::to_owned)?;
        self.entries.remove(&victim);
        self.stats.record_eviction();
        self.stats.set_current_size(self.entries.len());
        if self.config.stats_enabled() {
            debug!(key = %victim, "cache eviction");
        }
        Some(victim)
    }

    // == Clear All ==
    /// Empties the cache. Cumulative counters are kept.
    ///
    /// Returns the number of entries removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_current_size(0);
        removed
    }

    // == Clear Expired ==
    /// Removes every stale entry regardless of hit count.
    ///
    /// Returns the number of entries removed.
    pub fn clear_expired(&mut self) -> usize {
        let ttl = self.config.ttl();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh(ttl));
        self.stats.set_current_size(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns a snapshot of the counters with the live entry count.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_current_size(self.entries.len());
        stats
    }

    // == Reset Stats ==
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // == Entry Inspection ==
    /// Returns the hit count of a cached entry, fresh or stale.
    pub fn hit_count(&self, key: &CacheKey) -> Option<u64> {
        self.entries.get(key.as_str()).map(|e| e.hit_count)
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
