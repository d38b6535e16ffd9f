//! Cache Entry Module
//!
//! Defines the cached payload and the per-entry bookkeeping used for TTL and eviction.

use std::time::Duration;

use tokio::time::Instant;

use crate::models::ResumeTemplate;

// == Cached Value ==
/// Result of a storage query as held in the cache.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    /// Single-record lookup; `None` is a cached absence
    Template(Option<ResumeTemplate>),
    /// Ordered sequence of records
    Templates(Vec<ResumeTemplate>),
}

/// Conversion between query results and their cached form.
pub trait Cacheable: Sized {
    fn into_cached(self) -> CachedValue;
    fn from_cached(value: CachedValue) -> Option<Self>;
}

impl Cacheable for Option<ResumeTemplate> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Template(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Template(t) => Some(t),
            CachedValue::Templates(_) => None,
        }
    }
}

impl Cacheable for Vec<ResumeTemplate> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Templates(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Templates(ts) => Some(ts),
            CachedValue::Template(_) => None,
        }
    }
}

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: CachedValue,
    /// Insertion time
    pub inserted_at: Instant,
    /// Number of times this entry was served from cache
    pub hit_count: u64,
    /// Insertion order, orders entries with identical timestamps
    pub sequence: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a fresh entry stamped with the current time and a zero hit count.
    pub fn new(value: CachedValue, sequence: u64) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            hit_count: 0,
            sequence,
        }
    }

    // == Age ==
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.inserted_at)
    }

    // == Is Fresh ==
    /// An entry is fresh while its age is strictly below the TTL.
    ///
    /// Once the TTL has fully elapsed the entry is stale; a zero TTL makes
    /// every entry stale immediately.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.age() < ttl
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hit_count += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::fixtures::template;
    use crate::models::Category;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(CachedValue::Templates(vec![]), 7);

        assert_eq!(entry.hit_count, 0);
        assert_eq!(entry.sequence, 7);
        assert!(entry.is_fresh(Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_ttl_is_always_stale() {
        let entry = CacheEntry::new(CachedValue::Template(None), 0);
        assert!(!entry.is_fresh(Duration::ZERO));
    }

    #[test]
    fn test_record_hit() {
        let mut entry = CacheEntry::new(CachedValue::Template(None), 0);
        entry.record_hit();
        entry.record_hit();
        assert_eq!(entry.hit_count, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_goes_stale_at_ttl_boundary() {
        let ttl = Duration::from_millis(1000);
        let entry = CacheEntry::new(CachedValue::Template(None), 0);

        tokio::time::advance(Duration::from_millis(999)).await;
        assert!(entry.is_fresh(ttl));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!entry.is_fresh(ttl), "Entry should be stale once TTL has elapsed");
        assert_eq!(entry.age(), ttl);
    }

    #[test]
    fn test_cacheable_round_trip_keeps_variant() {
        let one = Some(template("ats-classic", Category::Ats));
        let cached = one.clone().into_cached();
        assert_eq!(Option::<ResumeTemplate>::from_cached(cached.clone()), Some(one));
        assert_eq!(Vec::<ResumeTemplate>::from_cached(cached), None);
    }
}
