//! Pure filter/sort/paginate pipeline over the product catalog.
//!
//! [`query`] is a pure function: it never touches shared state, so any
//! number of callers can run it concurrently over the same product slice.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stridewell_core::{BrandId, CategoryId, Price};

use crate::catalog::Product;

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

// =============================================================================
// FilterSpec
// =============================================================================

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order, newest first. Generation order stands in for a
    /// creation timestamp, so no reordering is applied.
    #[default]
    Newest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Highest rated first; ties keep catalog order.
    Popularity,
}

/// Inclusive price range filter.
///
/// The bounds are stored exactly as given: a range whose minimum exceeds
/// its maximum matches nothing, which surfaces as an empty result rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Create a range with the given inclusive bounds.
    #[must_use]
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> Price {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn max(&self) -> Price {
        self.max
    }

    /// Whether a price falls inside the range.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Combined filter, sort, and pagination request for product listings.
///
/// Every predicate is optional; an empty id set or `None` range means the
/// corresponding filter is skipped. Active predicates are AND-combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Keep products in any of these categories (empty = no filter).
    pub categories: HashSet<CategoryId>,
    /// Keep products from any of these brands (empty = no filter).
    pub brands: HashSet<BrandId>,
    /// Keep products whose base price falls inside this range.
    pub price_range: Option<PriceRange>,
    /// Keep only discounted products.
    pub on_sale_only: bool,
    /// Sort order applied after filtering.
    pub sort: SortKey,
    /// 1-based page number. Values below 1 are treated as page 1.
    pub page: u32,
    /// Page size. Values below 1 are treated as 1.
    pub per_page: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            categories: HashSet::new(),
            brands: HashSet::new(),
            price_range: None,
            on_sale_only: false,
            sort: SortKey::default(),
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

// =============================================================================
// PageResult
// =============================================================================

/// One page of products plus pagination metadata.
///
/// Constructed only by [`query`], so the metadata always satisfies
/// `total_pages == max(1, ceil(total_items / per_page))`. The counts are
/// intentionally not settable (or deserializable) independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    items: Vec<Product>,
    page: u32,
    per_page: u32,
    total_items: usize,
    total_pages: u32,
}

impl PageResult {
    /// Products on this page, in sorted order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Consume the result, returning the page's products.
    #[must_use]
    pub fn into_items(self) -> Vec<Product> {
        self.items
    }

    /// 1-based page number this slice was taken from.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size (the slice may be shorter on the last page).
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Total number of products matching the filter, across all pages.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.total_items
    }

    /// Total number of pages; at least 1 even for an empty match set.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Whether this page holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Query pipeline
// =============================================================================

/// Filter, sort, and paginate a product list.
#[must_use]
pub fn query(products: &[Product], spec: &FilterSpec) -> PageResult {
    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, spec))
        .cloned()
        .collect();

    sort(&mut matched, spec.sort);

    paginate(matched, spec.page.max(1), spec.per_page.max(1))
}

/// Whether a product satisfies every active predicate in the spec.
fn matches(product: &Product, spec: &FilterSpec) -> bool {
    if !spec.categories.is_empty() && !spec.categories.contains(&product.category) {
        return false;
    }
    if !spec.brands.is_empty() && !spec.brands.contains(&product.brand) {
        return false;
    }
    if let Some(range) = &spec.price_range
        && !range.contains(product.price)
    {
        return false;
    }
    if spec.on_sale_only && !product.is_on_sale() {
        return false;
    }
    true
}

/// Sort in place. Every arm uses a stable sort so ties keep catalog order.
fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Newest => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => products.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::Popularity => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }
}

/// Case-insensitive name comparison, tie-broken case-sensitively so the
/// order stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

/// Slice out the 1-based page window and derive the pagination metadata.
fn paginate(items: Vec<Product>, page: u32, per_page: u32) -> PageResult {
    let total_items = items.len();
    let total_pages = u32::try_from(total_items.div_ceil(per_page as usize))
        .unwrap_or(u32::MAX)
        .max(1);

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let page_items = if start >= total_items {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect()
    };

    PageResult {
        items: page_items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}
