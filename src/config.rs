//! Configuration Module
//!
//! Loads server configuration from environment variables. The cache itself
//! never reads the environment; `cache_config` turns these values into a
//! validated `CacheConfig`.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::cache::{CacheConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};
use crate::error::Result;
use crate::storage::DEFAULT_TIMEOUT;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached query results
    pub max_entries: usize,
    /// Cache time-to-live in milliseconds
    pub cache_ttl_ms: u64,
    /// Log cache hit/miss decisions
    pub stats_enabled: bool,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Catalog JSON file; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Remote catalog to cache instead of a local one
    pub backend_url: Option<String>,
    /// Per-request timeout for the remote catalog in milliseconds
    pub backend_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `CACHE_STATS_ENABLED` - Log hit/miss decisions (default: false)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60, zero is ignored)
    /// - `TEMPLATE_CATALOG` - Path to a catalog JSON file (default: bundled catalog)
    /// - `TEMPLATE_BACKEND_URL` - Remote catalog base URL; takes precedence over `TEMPLATE_CATALOG`
    /// - `TEMPLATE_BACKEND_TIMEOUT_MS` - Remote request timeout (default: 10000, zero is ignored)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("CACHE_MAX_ENTRIES", defaults.max_entries),
            cache_ttl_ms: env_or("CACHE_TTL_MS", defaults.cache_ttl_ms),
            stats_enabled: env_or("CACHE_STATS_ENABLED", defaults.stats_enabled),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_non_zero("CLEANUP_INTERVAL", defaults.cleanup_interval),
            catalog_path: env::var_os("TEMPLATE_CATALOG").map(PathBuf::from),
            backend_url: env::var("TEMPLATE_BACKEND_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            backend_timeout_ms: env_non_zero("TEMPLATE_BACKEND_TIMEOUT_MS", defaults.backend_timeout_ms),
        }
    }

    /// Builds the cache configuration, rejecting a zero capacity.
    pub fn cache_config(&self) -> Result<CacheConfig> {
        CacheConfig::from_millis(self.max_entries, self.cache_ttl_ms, self.stats_enabled)
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_millis(self.backend_timeout_ms)
    }
}

fn env_non_zero(name: &str, default: u64) -> u64 {
    non_zero_or(name, env_or(name, default), default)
}

/// A zero interval or timeout would spin or fail every request.
fn non_zero_or(name: &str, value: u64, default: u64) -> u64 {
    if value == 0 {
        warn!("{} must be greater than zero, using default {}", name, default);
        return default;
    }
    value
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            cache_ttl_ms: DEFAULT_TTL_MS,
            stats_enabled: false,
            server_port: 3000,
            cleanup_interval: 60,
            catalog_path: None,
            backend_url: None,
            backend_timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}
