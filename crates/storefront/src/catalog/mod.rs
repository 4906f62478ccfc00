//! Read-only product catalog.
//!
//! The catalog is loaded once, either from the built-in assortment or from a
//! JSON file, and never changes afterwards. Products are handed out as
//! `Arc<Product>` so cart lines can reference them without copying.

mod query;
mod seed;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;
use vitrine_core::{Product, ProductId};

pub use query::{CatalogQuery, SortOrder};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid product list.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Immutable, ordered product collection with id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    /// The built-in demo assortment.
    #[must_use]
    pub fn seeded() -> Self {
        let products = seed::products();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();

        Self {
            products: products.into_iter().map(Arc::new).collect(),
            index,
        }
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids repeat.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a JSON array of products from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or repeats
    /// an id.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.index
            .get(id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products flagged as featured, in catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|product| product.featured)
            .cloned()
            .collect()
    }

    /// Up to `limit` other products from the same category.
    ///
    /// Empty if `id` is not in the catalog.
    #[must_use]
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<Arc<Product>> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|other| other.id != product.id && other.category == product.category)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Products matching every filter in `query`, in the requested order.
    #[must_use]
    pub fn search(&self, query: &CatalogQuery) -> Vec<Arc<Product>> {
        let mut results: Vec<Arc<Product>> = self
            .products
            .iter()
            .filter(|product| query.matches(product))
            .cloned()
            .collect();
        query.sort.apply(&mut results);
        results
    }
}
