//! In-memory backend over a fixed template catalog.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, Difficulty, Layout, ResumeTemplate};
use crate::storage::TemplateStorage;

// == Local Template Storage ==
/// Serves templates from a catalog held in memory, filtering by linear scan.
#[derive(Debug, Clone, Default)]
pub struct LocalTemplateStorage {
    templates: Vec<ResumeTemplate>,
}

impl LocalTemplateStorage {
    pub fn new(templates: Vec<ResumeTemplate>) -> Self {
        Self { templates }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn filter<F>(&self, predicate: F) -> Vec<ResumeTemplate>
    where
        F: Fn(&ResumeTemplate) -> bool,
    {
        self.templates
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }
}

/// Case-insensitive substring match; `needle` must already be lowercase.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[async_trait]
impl TemplateStorage for LocalTemplateStorage {
    async fn get_all(&self) -> Result<Vec<ResumeTemplate>> {
        Ok(self.templates.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ResumeTemplate>> {
        Ok(self.templates.iter().find(|t| t.id == id).cloned())
    }

    async fn get_by_category(&self, category: Category) -> Result<Vec<ResumeTemplate>> {
        Ok(self.filter(|t| t.category == category))
    }

    /// Matches name, description, tags, industries and features.
    /// A blank query returns the whole catalog.
    async fn search(&self, query: &str) -> Result<Vec<ResumeTemplate>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.get_all().await;
        }

        Ok(self.filter(|t| {
            contains_ci(&t.name, &query)
                || contains_ci(&t.description, &query)
                || t.tags.iter().any(|tag| contains_ci(tag, &query))
                || t.industry.iter().any(|ind| contains_ci(ind, &query))
                || t.features.iter().any(|feat| contains_ci(feat, &query))
        }))
    }

    async fn get_by_industry(&self, industry: &str) -> Result<Vec<ResumeTemplate>> {
        let industry = industry.to_lowercase();
        Ok(self.filter(|t| t.industry.iter().any(|ind| contains_ci(ind, &industry))))
    }

    async fn get_premium(&self) -> Result<Vec<ResumeTemplate>> {
        Ok(self.filter(|t| t.is_premium))
    }

    async fn get_by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<ResumeTemplate>> {
        Ok(self.filter(|t| t.difficulty == difficulty))
    }

    async fn get_by_layout(&self, layout: Layout) -> Result<Vec<ResumeTemplate>> {
        Ok(self.filter(|t| t.layout == layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::fixtures::template;

    fn storage() -> LocalTemplateStorage {
        let mut classic = template("ats-classic", Category::Ats);
        classic.name = "ATS Classic".to_string();
        classic.industry = vec!["Finance".to_string(), "Healthcare".to_string()];

        let mut portfolio = template("creative-portfolio", Category::Creative);
        portfolio.name = "Creative Portfolio".to_string();
        portfolio.difficulty = Difficulty::Advanced;
        portfolio.layout = Layout::TwoColumn;
        portfolio.is_premium = true;
        portfolio.features = vec!["Portfolio Integration".to_string()];
        portfolio.industry = vec!["Design".to_string()];

        LocalTemplateStorage::new(vec![classic, portfolio])
    }

    #[tokio::test]
    async fn test_get_all_and_by_id() {
        let storage = storage();
        assert_eq!(storage.len(), 2);
        assert!(!storage.is_empty());
        assert!(LocalTemplateStorage::default().is_empty());
        assert_eq!(storage.get_all().await.unwrap().len(), 2);
        assert_eq!(
            storage.get_by_id("ats-classic").await.unwrap().map(|t| t.name),
            Some("ATS Classic".to_string())
        );
        assert!(storage.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_exact_match_filters() {
        let storage = storage();
        assert_eq!(storage.get_by_category(Category::Creative).await.unwrap().len(), 1);
        assert!(storage.get_by_category(Category::Academic).await.unwrap().is_empty());
        assert_eq!(storage.get_by_difficulty(Difficulty::Advanced).await.unwrap().len(), 1);
        assert_eq!(storage.get_by_layout(Layout::SingleColumn).await.unwrap().len(), 1);
        assert_eq!(storage.get_premium().await.unwrap()[0].id, "creative-portfolio");
    }

    #[tokio::test]
    async fn test_industry_is_case_insensitive_substring() {
        let storage = storage();
        let found = storage.get_by_industry("health").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "ats-classic");
    }

    #[tokio::test]
    async fn test_search_fields() {
        let storage = storage();
        assert_eq!(storage.search("portfolio integration").await.unwrap().len(), 1);
        assert_eq!(storage.search("  CLASSIC ").await.unwrap()[0].id, "ats-classic");
        assert_eq!(storage.search("design").await.unwrap()[0].id, "creative-portfolio");
        assert!(storage.search("zzz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_returns_everything() {
        let storage = storage();
        assert_eq!(storage.search("   ").await.unwrap().len(), 2);
    }
}
