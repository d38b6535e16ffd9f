//! Integration Tests for the HTTP storage backend
//!
//! Serves the catalog router on an ephemeral port and points
//! `HttpTemplateStorage` (optionally behind the cache) at it.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Router};
use template_cache::{
    api::create_router,
    models::{Category, Layout},
    storage::{parse_catalog, DEFAULT_CATALOG, DEFAULT_TIMEOUT},
    AppState, CacheConfig, CachedStorage, HttpTemplateStorage, StorageError, TemplateStorage,
};
use tokio::net::TcpListener;

// == Helper Functions ==

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Starts a catalog server and returns its state alongside the address.
async fn spawn_catalog_server() -> (AppState, SocketAddr) {
    let templates = parse_catalog(DEFAULT_CATALOG).unwrap();
    let state = AppState::from_templates(templates, CacheConfig::default());
    let addr = serve(create_router(state.clone())).await;
    (state, addr)
}

fn backend(addr: SocketAddr) -> HttpTemplateStorage {
    HttpTemplateStorage::new(&format!("http://{}", addr), DEFAULT_TIMEOUT).unwrap()
}

// == Backend Tests ==

#[tokio::test]
async fn test_remote_catalog_reads() {
    let (_, addr) = spawn_catalog_server().await;
    let storage = backend(addr);

    assert_eq!(storage.get_all().await.unwrap().len(), 16);

    let template = storage.get_by_id("modern-tech").await.unwrap().unwrap();
    assert_eq!(template.downloads, 18900);

    let ats = storage.get_by_category(Category::Ats).await.unwrap();
    assert_eq!(ats.len(), 4);

    let hybrid = storage.get_by_layout(Layout::Hybrid).await.unwrap();
    assert_eq!(hybrid.len(), 2);

    let premium = storage.get_premium().await.unwrap();
    assert_eq!(premium.len(), 5);

    let found = storage.search("portfolio").await.unwrap();
    assert!(found.iter().any(|t| t.id == "creative-portfolio"));
}

#[tokio::test]
async fn test_remote_missing_id_is_none() {
    let (_, addr) = spawn_catalog_server().await;

    let result = backend(addr).get_by_id("does-not-exist").await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_remote_ids_named_like_fixed_routes() {
    let mut templates = parse_catalog(DEFAULT_CATALOG).unwrap();
    for (template, id) in templates.iter_mut().zip(["premium", "stats", "query"]) {
        template.id = id.to_string();
    }
    let state = AppState::from_templates(templates, CacheConfig::default());
    let storage = backend(serve(create_router(state)).await);

    for id in ["premium", "stats", "query"] {
        let template = storage.get_by_id(id).await.unwrap();
        assert_eq!(template.map(|t| t.id), Some(id.to_string()));
    }
    assert!(storage.get_by_id("search").await.unwrap().is_none());
}

#[tokio::test]
async fn test_remote_error_status_is_reported() {
    let (_, addr) = spawn_catalog_server().await;
    let storage =
        HttpTemplateStorage::new(&format!("http://{}/missing", addr), DEFAULT_TIMEOUT).unwrap();

    let result = storage.get_all().await;

    assert!(matches!(result, Err(StorageError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_remote_timeout() {
    let slow = Router::new().route(
        "/templates",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        }),
    );
    let addr = serve(slow).await;
    let storage =
        HttpTemplateStorage::new(&format!("http://{}", addr), Duration::from_millis(100)).unwrap();

    let result = storage.get_all().await;

    assert!(matches!(result, Err(StorageError::Timeout(_))));
}

// == Cached Remote Tests ==

#[tokio::test]
async fn test_cache_in_front_of_remote_backend() {
    let (server, addr) = spawn_catalog_server().await;
    let cache = CachedStorage::with_defaults(backend(addr));

    cache.get_by_id("ats-classic").await.unwrap();
    cache.get_by_id("ats-classic").await.unwrap();
    cache.get_by_id("missing-one").await.unwrap();
    cache.get_by_id("missing-one").await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.current_size, 2);

    // The remote server only saw the two misses
    assert_eq!(server.cache.stats().await.misses, 2);
}

#[tokio::test]
async fn test_remote_failures_are_not_cached() {
    let (_, addr) = spawn_catalog_server().await;
    let storage =
        HttpTemplateStorage::new(&format!("http://{}/missing", addr), DEFAULT_TIMEOUT).unwrap();
    let cache = CachedStorage::with_defaults(storage);

    assert!(cache.get_all().await.is_err());
    assert!(cache.get_all().await.is_err());

    let stats = cache.stats().await;
    assert_eq!((stats.hits, stats.misses, stats.current_size), (0, 0, 0));
}
