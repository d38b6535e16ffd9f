//! Network backend talking to a remote template catalog over HTTP.
//!
//! Requests map one-to-one onto the catalog routes served by `api::create_router`.
//! Each request is bounded by the client timeout; failures are returned as-is
//! without retrying.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{Result, StorageError};
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};
use crate::storage::TemplateStorage;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// == HTTP Template Storage ==
#[derive(Debug, Clone)]
pub struct HttpTemplateStorage {
    client: Client,
    base_url: Url,
}

impl HttpTemplateStorage {
    // == Constructor ==
    /// Creates a backend rooted at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// # Errors
    /// Returns `StorageError::InvalidConfig` if the URL cannot carry a path.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StorageError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(StorageError::InvalidConfig(format!(
                "Base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Remote catalog request failed");
            return Err(StorageError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn fetch_list(&self, segments: &[&str]) -> Result<Vec<ResumeTemplate>> {
        self.fetch(self.url(segments)).await
    }
}

#[async_trait]
impl TemplateStorage for HttpTemplateStorage {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates"]).await
    }

    /// A 404 answer is absence, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>> {
        let url = self.url(&["templates", "id", id]);
        let response = self.client.get(url.clone()).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(StorageError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates", "category", category.as_str()])
            .await
    }

    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>> {
        let mut url = self.url(&["templates", "search"]);
        url.query_pairs_mut().append_pair("q", query);
        self.fetch(url).await
    }

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates", "industry", industry]).await
    }

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates", "premium"]).await
    }

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates", "difficulty", difficulty.as_str()])
            .await
    }

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>> {
        self.fetch_list(&["templates", "layout", layout.as_str()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        let result = HttpTemplateStorage::new("not a url", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(StorageError::InvalidConfig(_))));

        let result = HttpTemplateStorage::new("mailto:someone@example.com", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(StorageError::InvalidConfig(_))));
    }

    #[test]
    fn test_url_building() {
        let storage = HttpTemplateStorage::new("http://localhost:3000", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            storage.url(&["templates", "layout", "two-column"]).as_str(),
            "http://localhost:3000/templates/layout/two-column"
        );

        let storage = HttpTemplateStorage::new("http://localhost:3000/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(storage.base_url().path(), "/api/");
        assert_eq!(
            storage.url(&["templates", "id", "ats-classic"]).as_str(),
            "http://localhost:3000/api/templates/id/ats-classic"
        );
    }

    #[test]
    fn test_path_segments_are_escaped() {
        let storage = HttpTemplateStorage::new("http://localhost:3000", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            storage.url(&["templates", "industry", "Professional Services"]).as_str(),
            "http://localhost:3000/templates/industry/Professional%20Services"
        );
    }
}
