//! Deterministic catalog generation.
//!
//! Stands in for a real product database. Generation is driven by a
//! seeded RNG so the same seed always yields the same catalog, which
//! keeps accessor results reproducible across runs and in tests.
//!
//! Products are generated newest-first: index 0 is the most recent
//! arrival, and the catalog order is what "newest" sorting preserves.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use stridewell_core::{BrandId, CategoryId, Price, ProductId, Rating};

use crate::config::CatalogConfig;

use super::types::{Brand, Category, Product};

/// Category display names; ids are `cat1`..`cat4`.
const CATEGORY_NAMES: &[&str] = &["Running", "Casual", "Formal", "Sports"];

/// Brand display names; ids are `brand1`..`brand5`.
const BRAND_NAMES: &[&str] = &["Nike", "Adidas", "Puma", "Reebok", "New Balance"];

/// Marketing bullets shared by every generated product.
const PRODUCT_FEATURES: &[&str] = &[
    "Breathable mesh upper",
    "Cushioned insole",
    "Durable rubber outsole",
    "Available in multiple colors",
];

const PRODUCT_DESCRIPTION: &str = "Comfortable and stylish shoe perfect for everyday wear. \
     Feature-packed with the latest technology for optimal comfort and support.";

/// Base price in cents of the cheapest model tier.
const BASE_PRICE_CENTS: i64 = 59_99;

/// Price step in cents between model tiers; tiers repeat every 10 models.
const PRICE_STEP_CENTS: i64 = 10_00;

/// Generate the full reference data set for a catalog configuration.
pub(super) fn generate(config: &CatalogConfig) -> (Vec<Product>, Vec<Category>, Vec<Brand>) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let products: Vec<Product> = (0..config.product_count)
        .map(|index| generate_product(index, &mut rng))
        .collect();

    let categories = CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = CategoryId::new(format!("cat{}", i + 1));
            let count = products.iter().filter(|p| p.category == id).count();
            Category {
                id,
                name: (*name).to_string(),
                count,
                image: format!(
                    "https://picsum.photos/seed/{}/500/300",
                    name.to_lowercase()
                ),
            }
        })
        .collect();

    let brands = BRAND_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let id = BrandId::new(format!("brand{}", i + 1));
            let count = products.iter().filter(|p| p.brand == id).count();
            Brand {
                id,
                name: (*name).to_string(),
                count,
            }
        })
        .collect();

    (products, categories, brands)
}

/// Generate one product at the given catalog position.
fn generate_product(index: usize, rng: &mut StdRng) -> Product {
    let number = index + 1;

    // Ratings land on half steps between 2.5 and 4.5 stars
    let rating = Rating::from_half_steps(5 + rng.random_range(0..5));

    // Every 5th model is on sale at 10-39% off
    let discount_percent = if index % 5 == 0 {
        rng.random_range(10..40)
    } else {
        0
    };

    #[allow(clippy::cast_possible_wrap)] // tier index is 0..10
    let tier = (index % 10) as i64;

    Product {
        id: ProductId::new(format!("p{number}")),
        name: format!("Shoe Model {number}"),
        price: Price::from_cents(BASE_PRICE_CENTS + tier * PRICE_STEP_CENTS),
        image: format!("https://picsum.photos/seed/shoe{number}/300/300"),
        description: PRODUCT_DESCRIPTION.to_string(),
        rating,
        discount_percent,
        is_new: index % 7 == 0,
        features: PRODUCT_FEATURES.iter().map(ToString::to_string).collect(),
        stock: rng.random_range(5..55),
        brand: BrandId::new(format!("brand{}", (index % BRAND_NAMES.len()) + 1)),
        category: CategoryId::new(format!("cat{}", (index % CATEGORY_NAMES.len()) + 1)),
    }
}
