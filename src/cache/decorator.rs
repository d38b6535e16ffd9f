//! Cached Storage Module
//!
//! `CachedStorage` wraps any `TemplateStorage` and serves repeated queries from
//! a bounded, TTL-aware cache. It implements `TemplateStorage` itself, so it can
//! replace the backend it wraps anywhere.

use std::future::Future;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheConfig, CacheKey, CacheStats, CacheStore, Cacheable, Operation};
use crate::error::Result;
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};
use crate::storage::TemplateStorage;

// == Cached Storage ==
/// Caching decorator over a storage backend.
///
/// Every query except `search` goes through the cache. The store lock is only
/// held for the lookup and for the insert, never across the backend call, so
/// two concurrent misses on the same key may both reach the backend; the
/// second insert simply replaces the first.
#[derive(Debug)]
pub struct CachedStorage<S> {
    inner: S,
    store: RwLock<CacheStore>,
    config: CacheConfig,
}

impl<S: TemplateStorage> CachedStorage<S> {
    // == Constructor ==
    pub fn new(inner: S, config: CacheConfig) -> Self {
        Self {
            inner,
            store: RwLock::new(CacheStore::new(config.clone())),
            config,
        }
    }

    /// Wraps `inner` with the default configuration.
    pub fn with_defaults(inner: S) -> Self {
        Self::new(inner, CacheConfig::default())
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Get Or Fetch ==
    /// Serves `key` from cache when fresh, otherwise calls `fetch` and caches its result.
    ///
    /// Backend errors are returned unchanged; nothing is cached and no counter moves.
    async fn get_or_fetch<T, F, Fut>(&self, key: CacheKey, fetch: F) -> Result<T>
    where
        T: Cacheable + Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let cached = self.store.write().await.lookup(&key);
        if let Some(value) = cached.and_then(T::from_cached) {
            return Ok(value);
        }

        let value = fetch().await?;
        self.store
            .write()
            .await
            .insert(key, value.clone().into_cached());
        Ok(value)
    }

    // == Maintenance ==
    /// Removes every entry. Hit, miss and eviction counters are kept.
    pub async fn clear_all(&self) -> usize {
        let removed = self.store.write().await.clear_all();
        if self.config.stats_enabled() {
            info!("Cache cleared: removed {} entries", removed);
        }
        removed
    }

    /// Removes every entry older than the TTL and returns how many were removed.
    pub async fn clear_expired(&self) -> usize {
        let removed = self.store.write().await.clear_expired();
        if self.config.stats_enabled() {
            info!("Cache cleanup: removed {} expired entries", removed);
        }
        removed
    }

    /// Snapshot of the counters; `hit_rate()` is computed from it on demand.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Zeroes hits, misses and evictions. Cached entries are untouched.
    pub async fn reset_stats(&self) {
        self.store.write().await.reset_stats();
    }

    /// Hit count of the entry cached under `key`, if any.
    pub async fn hit_count(&self, key: &CacheKey) -> Option<u64> {
        self.store.read().await.hit_count(key)
    }
}

#[async_trait]
impl<S: TemplateStorage> TemplateStorage for CachedStorage<S> {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::all(Operation::GetAll), || self.inner.get_all())
            .await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::new(Operation::GetById, id), || {
            self.inner.get_by_id(id)
        })
        .await
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::new(Operation::GetByCategory, category), || {
            self.inner.get_by_category(category)
        })
        .await
    }

    /// Always delegates: free-text queries are never cached.
    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>> {
        if self.config.stats_enabled() {
            debug!(query, "search bypasses cache");
        }
        self.inner.search(query).await
    }

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::new(Operation::GetByIndustry, industry), || {
            self.inner.get_by_industry(industry)
        })
        .await
    }

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::all(Operation::GetPremium), || {
            self.inner.get_premium()
        })
        .await
    }

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::new(Operation::GetByDifficulty, difficulty), || {
            self.inner.get_by_difficulty(difficulty)
        })
        .await
    }

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>> {
        self.get_or_fetch(CacheKey::new(Operation::GetByLayout, layout), || {
            self.inner.get_by_layout(layout)
        })
        .await
    }
}
