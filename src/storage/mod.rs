//! Storage Module
//!
//! The `TemplateStorage` contract and the backends that implement it.

mod catalog;
mod http;
mod local;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};

pub use catalog::{load_catalog, parse_catalog, DEFAULT_CATALOG};
pub use http::{HttpTemplateStorage, DEFAULT_TIMEOUT};
pub use local::LocalTemplateStorage;

// == Template Storage ==
/// Read-only query interface over a catalog of templates.
///
/// Backends must surface failures as errors instead of returning empty
/// results. Absence is not an error: `get_by_id` returns `Ok(None)` and the
/// filters return an empty `Vec`.
#[async_trait]
pub trait TemplateStorage: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>>;

    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>>;

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>>;

    /// Free-text search over the catalog.
    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>>;

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>>;

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>>;

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>>;

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>>;
}

#[async_trait]
impl<S: TemplateStorage + ?Sized> TemplateStorage for Arc<S> {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>> {
        (**self).get_by_id(id).await
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>> {
        (**self).get_by_category(category).await
    }

    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>> {
        (**self).search(query).await
    }

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>> {
        (**self).get_by_industry(industry).await
    }

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>> {
        (**self).get_premium().await
    }

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>> {
        (**self).get_by_difficulty(difficulty).await
    }

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>> {
        (**self).get_by_layout(layout).await
    }
}
