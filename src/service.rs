//! Template Service
//!
//! Domain-level facade over a `TemplateStorage`. The service holds no cache of
//! its own; wrap the storage in `CachedStorage` to get caching.
//!
//! Query methods log backend failures and fall back to an empty result, so
//! callers that only render lists never see storage errors. `catalog_stats`
//! is the exception and propagates them.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{Result, StorageError};
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};
use crate::storage::TemplateStorage;

// == Template Filter ==
/// Filtering options; unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateFilter {
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub layout: Option<Layout>,
    pub is_premium: Option<bool>,
    /// Matches if any listed industry is a case-insensitive substring of a template industry
    pub industries: Vec<String>,
    /// Matches if any listed tag is a case-insensitive substring of a template tag
    pub tags: Vec<String>,
    pub search_query: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl TemplateFilter {
    fn matches(&self, t: &ResumeTemplate) -> bool {
        if self.category.is_some_and(|c| t.category != c) {
            return false;
        }
        if self.difficulty.is_some_and(|d| t.difficulty != d) {
            return false;
        }
        if self.layout.is_some_and(|l| t.layout != l) {
            return false;
        }
        if self.is_premium.is_some_and(|p| t.is_premium != p) {
            return false;
        }
        if !self.industries.is_empty() && !any_substring(&self.industries, &t.industry) {
            return false;
        }
        if !self.tags.is_empty() && !any_substring(&self.tags, &t.tags) {
            return false;
        }
        if self.min_rating.is_some_and(|min| t.rating < min) {
            return false;
        }
        if self.max_rating.is_some_and(|max| t.rating > max) {
            return false;
        }
        true
    }
}

/// True if any wanted value is a case-insensitive substring of any candidate.
fn any_substring(wanted: &[String], candidates: &[String]) -> bool {
    wanted.iter().any(|w| {
        let w = w.to_lowercase();
        candidates.iter().any(|c| c.to_lowercase().contains(&w))
    })
}

// == Sort Option ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    NameAsc,
    NameDesc,
    #[default]
    RatingDesc,
    RatingAsc,
    DownloadsDesc,
    DownloadsAsc,
    DateDesc,
    DateAsc,
}

impl FromStr for SortOption {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "name-asc" => Ok(SortOption::NameAsc),
            "name-desc" => Ok(SortOption::NameDesc),
            "rating-desc" => Ok(SortOption::RatingDesc),
            "rating-asc" => Ok(SortOption::RatingAsc),
            "downloads-desc" => Ok(SortOption::DownloadsDesc),
            "downloads-asc" => Ok(SortOption::DownloadsAsc),
            "date-desc" => Ok(SortOption::DateDesc),
            "date-asc" => Ok(SortOption::DateAsc),
            other => Err(StorageError::InvalidRequest(format!("Unknown sort option: {}", other))),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::RatingDesc => "rating-desc",
            SortOption::RatingAsc => "rating-asc",
            SortOption::DownloadsDesc => "downloads-desc",
            SortOption::DownloadsAsc => "downloads-asc",
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
        };
        f.write_str(s)
    }
}

// == Catalog Stats ==
/// Aggregate figures over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub premium: usize,
    pub free: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<String, usize>,
    pub by_layout: BTreeMap<String, usize>,
    pub avg_rating: f64,
    pub total_downloads: u64,
}

// == Template Service ==
#[derive(Clone)]
pub struct TemplateService {
    storage: Arc<dyn TemplateStorage>,
}

impl TemplateService {
    pub fn new(storage: Arc<dyn TemplateStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn TemplateStorage> {
        &self.storage
    }

    pub async fn get_all(&self) -> Vec<ResumeTemplate> {
        self.storage.get_all().await.unwrap_or_else(|e| {
            error!("Error fetching all templates: {}", e);
            Vec::new()
        })
    }

    /// Returns the template only if it exists and passes validation.
    pub async fn get_by_id(&self, id: &str) -> Option<ResumeTemplate> {
        match self.storage.get_by_id(id).await {
            Ok(Some(template)) => {
                if let Some(reason) = template.validate() {
                    error!(%id, %reason, "Invalid template data");
                    return None;
                }
                Some(template)
            }
            Ok(None) => {
                warn!("Template not found: {}", id);
                None
            }
            Err(e) => {
                error!("Error fetching template {}: {}", id, e);
                None
            }
        }
    }

    pub async fn get_by_category(&self, category: Category) -> Vec<ResumeTemplate> {
        self.storage.get_by_category(category).await.unwrap_or_else(|e| {
            error!("Error fetching templates by category {}: {}", category, e);
            Vec::new()
        })
    }

    /// A blank query returns the whole catalog.
    pub async fn search(&self, query: &str) -> Vec<ResumeTemplate> {
        if query.trim().is_empty() {
            return self.get_all().await;
        }
        self.storage.search(query).await.unwrap_or_else(|e| {
            error!("Error searching templates: {}", e);
            Vec::new()
        })
    }

    pub async fn get_premium_templates(&self) -> Vec<ResumeTemplate> {
        self.storage.get_premium().await.unwrap_or_else(|e| {
            error!("Error fetching premium templates: {}", e);
            Vec::new()
        })
    }

    pub async fn get_by_difficulty(&self, difficulty: Difficulty) -> Vec<ResumeTemplate> {
        self.storage.get_by_difficulty(difficulty).await.unwrap_or_else(|e| {
            error!("Error fetching templates by difficulty {}: {}", difficulty, e);
            Vec::new()
        })
    }

    pub async fn get_by_layout(&self, layout: Layout) -> Vec<ResumeTemplate> {
        self.storage.get_by_layout(layout).await.unwrap_or_else(|e| {
            error!("Error fetching templates by layout {}: {}", layout, e);
            Vec::new()
        })
    }

    pub async fn get_by_industry(&self, industry: &str) -> Vec<ResumeTemplate> {
        self.storage.get_by_industry(industry).await.unwrap_or_else(|e| {
            error!("Error fetching templates by industry {}: {}", industry, e);
            Vec::new()
        })
    }

    // == Filter ==
    /// Starts from the search results (or the whole catalog) and applies every set criterion.
    pub async fn filter(&self, filter: &TemplateFilter) -> Vec<ResumeTemplate> {
        let templates = match filter.search_query.as_deref() {
            Some(query) if !query.is_empty() => self.search(query).await,
            _ => self.get_all().await,
        };

        templates.into_iter().filter(|t| filter.matches(t)).collect()
    }

    // == Sort ==
    /// Returns a sorted copy; the input is left untouched. The sort is stable.
    pub fn sort(&self, templates: &[ResumeTemplate], sort_by: SortOption) -> Vec<ResumeTemplate> {
        let mut sorted = templates.to_vec();
        sorted.sort_by(|a, b| compare(a, b, sort_by));
        sorted
    }

    pub async fn query(&self, filter: &TemplateFilter, sort_by: SortOption) -> Vec<ResumeTemplate> {
        let filtered = self.filter(filter).await;
        debug!(count = filtered.len(), sort = %sort_by, "Template query");
        self.sort(&filtered, sort_by)
    }

    // == Catalog Stats ==
    /// Computes catalog-wide figures. Storage errors are propagated.
    pub async fn catalog_stats(&self) -> Result<CatalogStats> {
        let templates = self.storage.get_all().await.map_err(|e| {
            error!("Error calculating template stats: {}", e);
            e
        })?;

        let mut stats = CatalogStats {
            total: templates.len(),
            ..CatalogStats::default()
        };

        let mut rating_sum = 0.0;
        for t in &templates {
            if t.is_premium {
                stats.premium += 1;
            } else {
                stats.free += 1;
            }
            *stats.by_category.entry(t.category.to_string()).or_default() += 1;
            *stats.by_difficulty.entry(t.difficulty.to_string()).or_default() += 1;
            *stats.by_layout.entry(t.layout.to_string()).or_default() += 1;
            stats.total_downloads += t.downloads;
            rating_sum += t.rating;
        }

        if !templates.is_empty() {
            stats.avg_rating = rating_sum / templates.len() as f64;
        }
        Ok(stats)
    }

    pub fn validate(&self, template: &ResumeTemplate) -> bool {
        template.is_valid()
    }

    pub async fn exists(&self, id: &str) -> bool {
        self.get_by_id(id).await.is_some()
    }
}

/// Case-insensitive so that "beta" sorts between "Alpha" and "Charlie".
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(a: &ResumeTemplate, b: &ResumeTemplate, sort_by: SortOption) -> Ordering {
    match sort_by {
        SortOption::NameAsc => compare_names(&a.name, &b.name),
        SortOption::NameDesc => compare_names(&b.name, &a.name),
        SortOption::RatingDesc => b.rating.total_cmp(&a.rating),
        SortOption::RatingAsc => a.rating.total_cmp(&b.rating),
        SortOption::DownloadsDesc => b.downloads.cmp(&a.downloads),
        SortOption::DownloadsAsc => a.downloads.cmp(&b.downloads),
        SortOption::DateDesc => b.updated_at.cmp(&a.updated_at),
        SortOption::DateAsc => a.updated_at.cmp(&b.updated_at),
    }
}
