//! Catalog loading.
//!
//! Templates come either from a JSON file or from the catalog bundled with the
//! crate. Records that fail validation are skipped with a warning.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, StorageError};
use crate::models::ResumeTemplate;

/// Catalog bundled with the crate
pub const DEFAULT_CATALOG: &str = include_str!("../../data/templates.json");

// == Parse Catalog ==
/// Parses a JSON array of templates, dropping invalid records.
pub fn parse_catalog(json: &str) -> Result<Vec<ResumeTemplate>> {
    let templates: Vec<ResumeTemplate> = serde_json::from_str(json)
        .map_err(|e| StorageError::Catalog(format!("Failed to parse catalog: {}", e)))?;

    let total = templates.len();
    let valid: Vec<ResumeTemplate> = templates
        .into_iter()
        .filter(|t| match t.validate() {
            Some(reason) => {
                warn!(id = %t.id, %reason, "Skipping invalid template");
                false
            }
            None => true,
        })
        .collect();

    if valid.len() != total {
        warn!("Template validation: {} of {} templates failed validation", total - valid.len(), total);
    }
    Ok(valid)
}

// == Load Catalog ==
/// Loads the catalog from `path`, or the bundled catalog when no path is given.
pub async fn load_catalog(path: Option<&Path>) -> Result<Vec<ResumeTemplate>> {
    let templates = match path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await.map_err(|e| {
                StorageError::Catalog(format!("Failed to read {}: {}", path.display(), e))
            })?;
            parse_catalog(&json)?
        }
        None => parse_catalog(DEFAULT_CATALOG)?,
    };

    info!("Loaded catalog with {} templates", templates.len());
    Ok(templates)
}
