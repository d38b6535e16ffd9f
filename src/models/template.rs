//! Resume template record and its enumerated attributes.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// == Category ==
/// Template category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Ats,
    Creative,
    Modern,
    Classic,
    Executive,
    Minimal,
    Academic,
    Technical,
    Startup,
    Freelance,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Ats,
        Category::Creative,
        Category::Modern,
        Category::Classic,
        Category::Executive,
        Category::Minimal,
        Category::Academic,
        Category::Technical,
        Category::Startup,
        Category::Freelance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ats => "ats",
            Category::Creative => "creative",
            Category::Modern => "modern",
            Category::Classic => "classic",
            Category::Executive => "executive",
            Category::Minimal => "minimal",
            Category::Academic => "academic",
            Category::Technical => "technical",
            Category::Startup => "startup",
            Category::Freelance => "freelance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Difficulty ==
/// Template complexity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Layout ==
/// Template layout structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    SingleColumn,
    TwoColumn,
    Hybrid,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::SingleColumn => "single-column",
            Layout::TwoColumn => "two-column",
            Layout::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Color Scheme ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    Monochrome,
    Blue,
    Green,
    Purple,
    Red,
    Orange,
    Custom,
}

// == Resume Template ==
/// A single resume template in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTemplate {
    /// Unique kebab-case identifier (e.g. `ats-classic`)
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    /// Preview image path, kept for compatibility
    #[serde(default)]
    pub preview: String,
    pub features: Vec<String>,
    pub difficulty: Difficulty,
    /// Target industries
    pub industry: Vec<String>,
    pub layout: Layout,
    pub color_scheme: ColorScheme,
    pub is_premium: bool,
    /// Average user rating, 0 to 5
    pub rating: f64,
    pub downloads: u64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ResumeTemplate {
    // == Validate ==
    /// Checks the record against the catalog schema.
    ///
    /// Returns a description of the first violation, or None if the record is valid.
    pub fn validate(&self) -> Option<String> {
        if self.id.is_empty() {
            return Some("Template id cannot be empty".to_string());
        }
        let kebab = self
            .id
            .split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        if !kebab {
            return Some(format!("Template id '{}' is not lowercase kebab-case", self.id));
        }
        let name_len = self.name.chars().count();
        if !(3..=50).contains(&name_len) {
            return Some(format!("Template name must be 3-50 characters, got {}", name_len));
        }
        if self.description.trim().is_empty() {
            return Some("Template description cannot be empty".to_string());
        }
        if self.features.is_empty() {
            return Some("Template must list at least one feature".to_string());
        }
        if self.industry.is_empty() {
            return Some("Template must target at least one industry".to_string());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Some(format!("Template rating {} is outside 0-5", self.rating));
        }
        None
    }

    /// Returns true if the record passes `validate`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_none()
    }
}
