//! API Handlers
//!
//! HTTP request handlers for the catalog and cache maintenance endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::{CacheConfig, CachedStorage};
use crate::error::{Result, StorageError};
use crate::models::{
    Category, ClearResponse, Difficulty, HealthResponse, Layout, MessageResponse, ResumeTemplate,
    SearchParams, StatsResponse, TemplateQueryParams,
};
use crate::service::{CatalogStats, TemplateService};
use crate::storage::{LocalTemplateStorage, TemplateStorage};

/// Cache over a type-erased backend, as served by the API.
pub type SharedCache = CachedStorage<Arc<dyn TemplateStorage>>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached storage answering the catalog endpoints
    pub cache: Arc<SharedCache>,
    /// Filtering and sorting on top of the cached storage
    pub service: TemplateService,
}

impl AppState {
    /// Wraps `backend` in a cache built from `config`.
    pub fn new(backend: Arc<dyn TemplateStorage>, config: CacheConfig) -> Self {
        let cache = Arc::new(CachedStorage::new(backend, config));
        let service = TemplateService::new(cache.clone());
        Self { cache, service }
    }

    /// Serves an in-memory catalog.
    pub fn from_templates(templates: Vec<ResumeTemplate>, config: CacheConfig) -> Self {
        Self::new(Arc::new(LocalTemplateStorage::new(templates)), config)
    }
}

type TemplateList = Result<Json<Vec<ResumeTemplate>>>;

/// Handler for GET /templates
pub async fn list_templates(State(state): State<AppState>) -> TemplateList {
    Ok(Json(state.cache.get_all().await?))
}

/// Handler for GET /templates/id/:id
///
/// Single records live under their own prefix so ids such as `premium` or
/// `stats` never collide with the fixed listing routes.
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeTemplate>> {
    state
        .cache
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(StorageError::NotFound(id))
}

/// Handler for GET /templates/category/:category
pub async fn templates_by_category(
    State(state): State<AppState>,
    Path(category): Path<Category>,
) -> TemplateList {
    Ok(Json(state.cache.get_by_category(category).await?))
}

/// Handler for GET /templates/industry/:industry
pub async fn templates_by_industry(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> TemplateList {
    Ok(Json(state.cache.get_by_industry(&industry).await?))
}

/// Handler for GET /templates/difficulty/:difficulty
pub async fn templates_by_difficulty(
    State(state): State<AppState>,
    Path(difficulty): Path<Difficulty>,
) -> TemplateList {
    Ok(Json(state.cache.get_by_difficulty(difficulty).await?))
}

/// Handler for GET /templates/layout/:layout
pub async fn templates_by_layout(
    State(state): State<AppState>,
    Path(layout): Path<Layout>,
) -> TemplateList {
    Ok(Json(state.cache.get_by_layout(layout).await?))
}

/// Handler for GET /templates/premium
pub async fn premium_templates(State(state): State<AppState>) -> TemplateList {
    Ok(Json(state.cache.get_premium().await?))
}

/// Handler for GET /templates/search?q=
///
/// Goes straight to the backend; search results are never cached.
pub async fn search_templates(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> TemplateList {
    Ok(Json(state.cache.search(&params.q).await?))
}

/// Handler for GET /templates/query
pub async fn query_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateQueryParams>,
) -> TemplateList {
    let (filter, sort) = params.into_filter()?;
    Ok(Json(state.service.query(&filter, sort).await))
}

/// Handler for GET /templates/stats
pub async fn catalog_stats(State(state): State<AppState>) -> Result<Json<CatalogStats>> {
    Ok(Json(state.service.catalog_stats().await?))
}

/// Handler for GET /cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for POST /cache/clear
pub async fn clear_cache(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear_all().await;
    info!("Cache cleared via API: {} entries removed", removed);
    Json(ClearResponse::new("Cache cleared", removed))
}

/// Handler for POST /cache/clear-expired
pub async fn clear_expired(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear_expired().await;
    Json(ClearResponse::new("Expired entries cleared", removed))
}

/// Handler for POST /cache/stats/reset
pub async fn reset_stats(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.reset_stats().await;
    Json(MessageResponse::new("Cache statistics reset"))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
