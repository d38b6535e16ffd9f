//! Test backend that counts calls and can be switched into a failing mode.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{Result, StorageError};
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};
use crate::storage::{parse_catalog, LocalTemplateStorage, TemplateStorage, DEFAULT_CATALOG};

#[derive(Debug, Default)]
pub struct CountingStorage {
    inner: LocalTemplateStorage,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl CountingStorage {
    pub fn new(templates: Vec<ResumeTemplate>) -> Self {
        Self {
            inner: LocalTemplateStorage::new(templates),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn with_default_catalog() -> Self {
        Self::new(parse_catalog(DEFAULT_CATALOG).unwrap())
    }

    /// Number of backend calls made so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TemplateStorage for CountingStorage {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_by_id(id).await
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_by_category(category).await
    }

    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.search(query).await
    }

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_by_industry(industry).await
    }

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_premium().await
    }

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_by_difficulty(difficulty).await
    }

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>> {
        self.enter()?;
        self.inner.get_by_layout(layout).await
    }
}
