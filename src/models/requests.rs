//! Request DTOs for the catalog API
//!
//! Query-string parameters accepted by the template endpoints.

use serde::Deserialize;

use crate::error::{Result, StorageError};
use crate::models::{Category, Difficulty, Layout};
use crate::service::{SortOption, TemplateFilter};

/// Query string for GET /templates/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Query string for GET /templates/query
///
/// `industries` and `tags` are comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateQueryParams {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub layout: Option<Layout>,
    pub premium: Option<bool>,
    pub industries: Option<String>,
    pub tags: Option<String>,
    pub q: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub sort: Option<SortOption>,
}

impl TemplateQueryParams {
    /// Validates the parameters and converts them into a service filter.
    pub fn into_filter(self) -> Result<(TemplateFilter, SortOption)> {
        for rating in [self.min_rating, self.max_rating].into_iter().flatten() {
            if !(0.0..=5.0).contains(&rating) {
                return Err(StorageError::InvalidRequest(format!(
                    "Rating bound {} is outside 0-5",
                    rating
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_rating, self.max_rating) {
            if min > max {
                return Err(StorageError::InvalidRequest(
                    "min_rating cannot exceed max_rating".to_string(),
                ));
            }
        }

        let filter = TemplateFilter {
            category: self.category,
            difficulty: self.difficulty,
            layout: self.layout,
            is_premium: self.premium,
            industries: split_list(self.industries.as_deref()),
            tags: split_list(self.tags.as_deref()),
            search_query: self.q.filter(|q| !q.trim().is_empty()),
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        };
        Ok((filter, self.sort.unwrap_or_default()))
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
