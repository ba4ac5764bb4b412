//! Domain types for the storefront catalog.
//!
//! These are the records the data client serves to the presentation
//! layer. All of them are generated once at startup and never mutated.

use serde::{Deserialize, Serialize};

use stridewell_core::{BrandId, CategoryId, Price, ProductId, Rating};

// =============================================================================
// Product
// =============================================================================

/// A product in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price before any discount.
    pub price: Price,
    /// Primary image URL.
    pub image: String,
    /// Plain text description.
    pub description: String,
    /// Average review rating.
    pub rating: Rating,
    /// Discount percentage (0 = not on sale).
    pub discount_percent: u8,
    /// Whether the product is a new arrival.
    pub is_new: bool,
    /// Marketing feature bullets.
    pub features: Vec<String>,
    /// Units currently in stock.
    pub stock: u32,
    /// Brand this product belongs to.
    pub brand: BrandId,
    /// Category this product belongs to.
    pub category: CategoryId,
}

impl Product {
    /// Whether the product currently has a discount applied.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.discount_percent > 0
    }

    /// Unit price after the discount, or the base price when not on sale.
    #[must_use]
    pub fn sale_price(&self) -> Price {
        if self.is_on_sale() {
            self.price.discounted(self.discount_percent)
        } else {
            self.price
        }
    }
}

// =============================================================================
// Reference Data
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Number of catalog products in this category.
    pub count: usize,
    /// Banner image URL.
    pub image: String,
}

/// A shoe brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Brand ID.
    pub id: BrandId,
    /// Display name.
    pub name: String,
    /// Number of catalog products from this brand.
    pub count: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(discount_percent: u8) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Trail Runner 1".to_string(),
            price: Price::from_cents(10_000),
            image: "https://example.test/p1.jpg".to_string(),
            description: "A shoe".to_string(),
            rating: Rating::from_half_steps(8),
            discount_percent,
            is_new: false,
            features: vec![],
            stock: 10,
            brand: BrandId::new("brand1"),
            category: CategoryId::new("cat1"),
        }
    }

    #[test]
    fn test_sale_price_with_discount() {
        let p = product(20);
        assert!(p.is_on_sale());
        assert_eq!(p.sale_price(), Price::from_cents(8_000));
    }

    #[test]
    fn test_sale_price_without_discount() {
        let p = product(0);
        assert!(!p.is_on_sale());
        assert_eq!(p.sale_price(), p.price);
    }
}
