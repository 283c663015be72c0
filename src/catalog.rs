use crate::models::Item;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, ordered list of items as shipped in the catalog file.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, dropping items with an unusable price and any repeat
    /// of a name already seen.
    pub fn new(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                if !item.price.is_finite() || item.price < 0.0 {
                    warn!(item = %item.name, price = item.price, "skipping catalog item with invalid price");
                    return false;
                }
                if !seen.insert(item.name.clone()) {
                    warn!(item = %item.name, "skipping duplicate catalog item");
                    return false;
                }
                true
            })
            .collect();

        Self { items }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(raw)?;
        Ok(Self::new(items))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Startup entry point. A missing or broken catalog is logged and the shop
    /// carries on with nothing to sell.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(catalog) => {
                info!(items = catalog.len(), path = %path.as_ref().display(), "catalog loaded");
                catalog
            }
            Err(e) => {
                error!(error = %e, "catalog unavailable, continuing with an empty catalog");
                Self::default()
            }
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for item in &self.items {
            if !out.contains(&item.category.as_str()) {
                out.push(&item.category);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
