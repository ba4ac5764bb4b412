//! Mock storefront data client.
//!
//! Stands in for a real backend client: every accessor suspends for a
//! simulated latency interval before computing its result from the
//! in-memory catalog, so callers are written against the same async
//! boundary a network client would impose. Requests touch no mutable
//! state, so any number may be in flight concurrently; cancelling one is
//! just dropping its future.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use stridewell_core::ProductId;

use crate::catalog::{Brand, CatalogStore, Category, Product};
use crate::config::{LatencyProfile, StorefrontConfig};
use crate::error::{Result, StorefrontError};
use crate::query::{FilterSpec, PageResult, query};

/// Number of products returned by [`StorefrontClient::featured`].
pub const FEATURED_COUNT: usize = 8;

/// Number of products returned by [`StorefrontClient::new_arrivals`].
pub const NEW_ARRIVAL_COUNT: usize = 4;

/// Default limit for [`StorefrontClient::related`].
pub const RELATED_LIMIT: usize = 4;

/// Maximum number of items returned by one search.
pub const SEARCH_RESULT_CAP: usize = 20;

/// Matches from a catalog text search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// Matched products, capped at [`SEARCH_RESULT_CAP`].
    pub items: Vec<Product>,
    /// True match count before capping.
    pub total_items: usize,
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the storefront catalog.
///
/// Provides async access to products, reference data, and search over the
/// generated catalog, with a simulated network delay on every request.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

#[derive(Debug)]
struct StorefrontClientInner {
    catalog: CatalogStore,
    latency: LatencyProfile,
}

impl StorefrontClient {
    /// Create a new client over an already-generated catalog.
    #[must_use]
    pub fn new(catalog: CatalogStore, latency: LatencyProfile) -> Self {
        Self {
            inner: Arc::new(StorefrontClientInner { catalog, latency }),
        }
    }

    /// Create a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration variable is present but
    /// invalid.
    pub fn from_env() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        let catalog = CatalogStore::generate(&config.catalog);
        Ok(Self::new(catalog, config.latency))
    }

    /// The underlying catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Suspend for one simulated network round trip.
    async fn simulate_latency(&self) {
        let delay = self.inner.latency.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// List products matching a filter spec, one page at a time.
    #[instrument(skip(self, spec))]
    pub async fn list_products(&self, spec: &FilterSpec) -> Result<PageResult> {
        self.simulate_latency().await;

        let result = query(self.inner.catalog.products(), spec);
        debug!(
            page = result.page(),
            total_items = result.total_items(),
            "Listed products"
        );
        Ok(result)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::ProductNotFound`] when no product
    /// matches the id.
    #[instrument(skip(self))]
    pub async fn product(&self, id: &ProductId) -> Result<Product> {
        self.simulate_latency().await;

        self.inner
            .catalog
            .product(id)
            .cloned()
            .ok_or_else(|| StorefrontError::ProductNotFound(id.clone()))
    }

    /// The highest-rated products, capped at [`FEATURED_COUNT`].
    ///
    /// Rating ties keep catalog order.
    pub async fn featured(&self) -> Result<Vec<Product>> {
        self.simulate_latency().await;

        let mut products = self.inner.catalog.products().to_vec();
        products.sort_by(|a, b| b.rating.cmp(&a.rating));
        products.truncate(FEATURED_COUNT);
        Ok(products)
    }

    /// Products flagged as new arrivals, always [`NEW_ARRIVAL_COUNT`] items
    /// when the catalog is large enough.
    ///
    /// If fewer than [`NEW_ARRIVAL_COUNT`] products carry the flag, the
    /// list is backfilled with non-new products in catalog order.
    pub async fn new_arrivals(&self) -> Result<Vec<Product>> {
        self.simulate_latency().await;

        let products = self.inner.catalog.products();
        let mut picks: Vec<Product> = products
            .iter()
            .filter(|p| p.is_new)
            .take(NEW_ARRIVAL_COUNT)
            .cloned()
            .collect();

        if picks.len() < NEW_ARRIVAL_COUNT {
            let backfill = products
                .iter()
                .filter(|p| !p.is_new)
                .take(NEW_ARRIVAL_COUNT - picks.len())
                .cloned();
            picks.extend(backfill);
        }

        Ok(picks)
    }

    /// Products related to the given one: same category first, then same
    /// brand in a different category, capped at `limit`.
    ///
    /// An id absent from the catalog falls back to the first `limit`
    /// catalog products rather than failing; the detail view calling this
    /// has already surfaced the lookup error.
    pub async fn related(&self, id: &ProductId, limit: usize) -> Result<Vec<Product>> {
        self.simulate_latency().await;

        let products = self.inner.catalog.products();
        let Some(source) = self.inner.catalog.product(id) else {
            return Ok(products.iter().take(limit).cloned().collect());
        };

        let mut related: Vec<Product> = products
            .iter()
            .filter(|p| p.id != *id && p.category == source.category)
            .take(limit)
            .cloned()
            .collect();

        if related.len() < limit {
            let backfill = products
                .iter()
                .filter(|p| {
                    p.id != *id && p.category != source.category && p.brand == source.brand
                })
                .take(limit - related.len())
                .cloned();
            related.extend(backfill);
        }

        Ok(related)
    }

    /// Case-insensitive substring search over product names and
    /// descriptions.
    ///
    /// A blank query yields an empty result set, not an error. The item
    /// list is capped at [`SEARCH_RESULT_CAP`] but `total_items` reports
    /// the uncapped match count.
    #[instrument(skip(self))]
    pub async fn search(&self, query_text: &str) -> Result<SearchResults> {
        self.simulate_latency().await;

        let needle = query_text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(SearchResults {
                items: Vec::new(),
                total_items: 0,
            });
        }

        let matches: Vec<&Product> = self
            .inner
            .catalog
            .products()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect();

        let total_items = matches.len();
        debug!(total_items, "Searched catalog");

        Ok(SearchResults {
            items: matches
                .into_iter()
                .take(SEARCH_RESULT_CAP)
                .cloned()
                .collect(),
            total_items,
        })
    }

    /// All categories, verbatim reference data.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.simulate_latency().await;
        Ok(self.inner.catalog.categories().to_vec())
    }

    /// All brands, verbatim reference data.
    pub async fn brands(&self) -> Result<Vec<Brand>> {
        self.simulate_latency().await;
        Ok(self.inner.catalog.brands().to_vec())
    }
}
