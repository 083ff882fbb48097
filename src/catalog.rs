use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One product record from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub brand: String,
    pub model: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

/// The product catalog, loaded once at startup and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog(Vec<CatalogItem>);

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self(items)
    }

    /// Parse a catalog from a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).context("catalog is not a valid JSON item array")?;
        Ok(Self(items))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog file {}", path.display()))?;
        let catalog = Self::from_json_str(&raw)?;
        info!(items = catalog.len(), path = %path.display(), "catalog loaded");
        Ok(catalog)
    }

    /// Serialize the catalog for embedding into prompt text.
    pub fn prompt_excerpt(&self) -> String {
        // The catalog is built from valid items, so serialization cannot fail.
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    /// Serialize only the items whose category is in `allowed`, so a quote
    /// prompt never mentions equipment outside the requested systems.
    pub fn prompt_excerpt_for(&self, allowed: &[&str]) -> String {
        let filtered: Vec<&CatalogItem> = self
            .0
            .iter()
            .filter(|item| allowed.contains(&item.category.as_str()))
            .collect();
        serde_json::to_string(&filtered).unwrap_or_default()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
