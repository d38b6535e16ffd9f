//! API Routes
//!
//! Configures the Axum router with the catalog and cache endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats, catalog_stats, clear_cache, clear_expired, get_template, health_handler,
    list_templates, premium_templates, query_templates, reset_stats, search_templates,
    templates_by_category, templates_by_difficulty, templates_by_industry, templates_by_layout,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /templates` and `GET /templates/id/:id`
/// - `GET /templates/{category,industry,difficulty,layout}/:value`
/// - `GET /templates/premium`, `GET /templates/search?q=`
/// - `GET /templates/query` - filtered and sorted listing
/// - `GET /templates/stats` - catalog statistics
/// - `GET /cache/stats`, `POST /cache/clear`, `POST /cache/clear-expired`,
///   `POST /cache/stats/reset`
/// - `GET /health`
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/templates", get(list_templates))
        .route("/templates/premium", get(premium_templates))
        .route("/templates/search", get(search_templates))
        .route("/templates/query", get(query_templates))
        .route("/templates/stats", get(catalog_stats))
        .route("/templates/category/:category", get(templates_by_category))
        .route("/templates/industry/:industry", get(templates_by_industry))
        .route("/templates/difficulty/:difficulty", get(templates_by_difficulty))
        .route("/templates/layout/:layout", get(templates_by_layout))
        .route("/templates/id/:id", get(get_template))
        .route("/cache/stats", get(cache_stats))
        .route("/cache/stats/reset", post(reset_stats))
        .route("/cache/clear", post(clear_cache))
        .route("/cache/clear-expired", post(clear_expired))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
