//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CachedStorage;
use crate::storage::TemplateStorage;

/// Spawns a background task that periodically clears expired cache entries.
///
/// Stale entries are already treated as misses on read; this task only
/// reclaims their memory. The returned handle is aborted on shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(CachedStorage::with_defaults(backend));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<S>(
    cache: Arc<CachedStorage<S>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    S: TemplateStorage + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.clear_expired().await;
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::storage::testing::CountingStorage;

    fn cache(ttl_ms: u64) -> Arc<CachedStorage<CountingStorage>> {
        Arc::new(CachedStorage::new(
            CountingStorage::with_default_catalog(),
            CacheConfig::from_millis(100, ttl_ms, false).unwrap(),
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = cache(1000);
        cache.get_all().await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 2);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(cache.stats().await.current_size, 0, "Expired entry should have been cleaned up");

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = cache(3_600_000);
        cache.get_all().await.unwrap();

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(cache.stats().await.current_size, 1, "Valid entry should not be removed");

        cache.get_all().await.unwrap();
        assert_eq!(cache.inner().calls(), 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(cache(1000), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
