//! Template Cache - resume template catalog server
//!
//! Fronts a template catalog (bundled, on disk, or remote) with the caching
//! layer and serves it over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use template_cache::api::{create_router, AppState};
use template_cache::storage::load_catalog;
use template_cache::{
    spawn_cleanup_task, Config, HttpTemplateStorage, LocalTemplateStorage, TemplateStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(
        max_entries = config.max_entries,
        ttl_ms = config.cache_ttl_ms,
        stats_enabled = config.stats_enabled,
        port = config.server_port,
        cleanup_interval_secs = config.cleanup_interval,
        "Configuration loaded"
    );

    let cache_config = config.cache_config().context("invalid cache configuration")?;
    let backend = build_backend(&config).await?;
    let state = AppState::new(backend, cache_config);

    let cleanup = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Serving template catalog on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal(cleanup))
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// RUST_LOG overrides the default filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "template_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Picks the storage the cache will front: a remote catalog when
/// `TEMPLATE_BACKEND_URL` is set, otherwise the local one.
async fn build_backend(config: &Config) -> anyhow::Result<Arc<dyn TemplateStorage>> {
    if let Some(url) = config.backend_url.as_deref() {
        let remote = HttpTemplateStorage::new(url, config.backend_timeout())
            .context("invalid remote catalog URL")?;
        info!(%url, timeout_ms = config.backend_timeout_ms, "Caching remote catalog");
        return Ok(Arc::new(remote));
    }

    let templates = load_catalog(config.catalog_path.as_deref())
        .await
        .context("failed to load template catalog")?;
    Ok(Arc::new(LocalTemplateStorage::new(templates)))
}

/// Resolves on Ctrl+C or SIGTERM and stops the cleanup task.
async fn shutdown_signal(cleanup: JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received, shutting down"),
        _ = terminate => info!("SIGTERM received, shutting down"),
    }

    cleanup.abort();
}
