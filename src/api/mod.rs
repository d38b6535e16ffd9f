//! API Module
//!
//! HTTP handlers and routing for the template catalog.
//!
//! Catalog reads are served through the cache; `/cache/*` exposes the cache
//! statistics and maintenance operations.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
