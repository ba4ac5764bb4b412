//! In-memory product catalog.
//!
//! The catalog is generated once at startup and is read-only for the
//! lifetime of the process: products, categories, and brands are never
//! mutated after generation.

mod seed;
mod types;

pub use types::{Brand, Category, Product};

use std::sync::Arc;

use tracing::info;

use stridewell_core::ProductId;

use crate::config::CatalogConfig;

/// Read-only store of products, categories, and brands.
///
/// Cheaply cloneable via `Arc`; every clone shares the same generated
/// records.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
}

impl CatalogStore {
    /// Generate a catalog from the given configuration.
    #[must_use]
    pub fn generate(config: &CatalogConfig) -> Self {
        let (products, categories, brands) = seed::generate(config);
        info!(
            seed = config.seed,
            products = products.len(),
            categories = categories.len(),
            brands = brands.len(),
            "Generated catalog"
        );

        Self {
            inner: Arc::new(CatalogInner {
                products,
                categories,
                brands,
            }),
        }
    }

    /// All products, newest first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.inner.products
    }

    /// All categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    /// All brands.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.inner.brands
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.inner.products.iter().find(|p| p.id == *id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }

    /// Build a store from explicit records, bypassing generation.
    #[cfg(test)]
    pub(crate) fn from_parts(
        products: Vec<Product>,
        categories: Vec<Category>,
        brands: Vec<Brand>,
    ) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                products,
                categories,
                brands,
            }),
        }
    }
}
