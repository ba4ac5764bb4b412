//! End-to-end behavior of the storefront client and query engine over the
//! full generated catalog.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use stridewell_core::{CategoryId, Price, ProductId};
use stridewell_integration_tests::{TEST_PRODUCT_COUNT, test_catalog, test_client};
use stridewell_storefront::catalog::Product;
use stridewell_storefront::client::{
    FEATURED_COUNT, NEW_ARRIVAL_COUNT, RELATED_LIMIT, SEARCH_RESULT_CAP,
};
use stridewell_storefront::error::StorefrontError;
use stridewell_storefront::query::{FilterSpec, PriceRange, SortKey};

fn sale_spec() -> FilterSpec {
    FilterSpec {
        categories: [CategoryId::new("cat1"), CategoryId::new("cat2")].into(),
        on_sale_only: true,
        ..FilterSpec::default()
    }
}

#[tokio::test]
async fn total_items_matches_predicate_census() {
    let client = test_client();
    let spec = sale_spec();

    let result = client.list_products(&spec).await.unwrap();

    let expected = client
        .catalog()
        .products()
        .iter()
        .filter(|p| spec.categories.contains(&p.category) && p.is_on_sale())
        .count();
    assert_eq!(result.total_items(), expected);
}

#[tokio::test]
async fn concatenated_pages_reproduce_filtered_list() {
    let client = test_client();
    let base = FilterSpec {
        sort: SortKey::PriceAsc,
        per_page: 5,
        ..FilterSpec::default()
    };

    let first = client.list_products(&base).await.unwrap();
    let mut collected: Vec<Product> = Vec::new();
    for page in 1..=first.total_pages() {
        let spec = FilterSpec {
            page,
            ..base.clone()
        };
        let result = client.list_products(&spec).await.unwrap();
        collected.extend(result.into_items());
    }

    // No gaps, no duplicates: every catalog product appears exactly once
    assert_eq!(collected.len(), TEST_PRODUCT_COUNT);
    let distinct: HashSet<ProductId> = collected.iter().map(|p| p.id.clone()).collect();
    assert_eq!(distinct.len(), TEST_PRODUCT_COUNT);

    // And the concatenation is the whole sorted list
    let whole = client
        .list_products(&FilterSpec {
            per_page: u32::try_from(TEST_PRODUCT_COUNT).unwrap(),
            ..base
        })
        .await
        .unwrap();
    assert_eq!(collected, whole.into_items());
}

#[tokio::test]
async fn price_ascending_is_a_total_order() {
    let client = test_client();
    let result = client
        .list_products(&FilterSpec {
            sort: SortKey::PriceAsc,
            per_page: u32::try_from(TEST_PRODUCT_COUNT).unwrap(),
            ..FilterSpec::default()
        })
        .await
        .unwrap();

    for pair in result.items().windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
}

#[tokio::test]
async fn price_range_and_sale_filters_agree_with_product_fields() {
    let client = test_client();
    let range = PriceRange::new(Price::from_cents(100_00), Price::from_cents(120_00));
    let result = client
        .list_products(&FilterSpec {
            price_range: Some(range),
            on_sale_only: true,
            per_page: u32::try_from(TEST_PRODUCT_COUNT).unwrap(),
            ..FilterSpec::default()
        })
        .await
        .unwrap();

    assert!(!result.is_empty());
    for product in result.items() {
        assert!(range.contains(product.price));
        assert!(product.is_on_sale());
    }
}

#[tokio::test]
async fn unknown_product_fails_with_not_found_only() {
    let client = test_client();
    let err = client
        .product(&ProductId::new("does-not-exist"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::ProductNotFound(_)));
}

#[tokio::test]
async fn featured_returns_top_rated_eight() {
    let client = test_client();
    let featured = client.featured().await.unwrap();

    assert_eq!(featured.len(), FEATURED_COUNT);
    let floor = featured.last().unwrap().rating;
    let better_than_floor = client
        .catalog()
        .products()
        .iter()
        .filter(|p| p.rating > floor)
        .count();
    // Nothing rated above the cut was left out
    assert!(better_than_floor < FEATURED_COUNT);
}

#[tokio::test]
async fn new_arrivals_always_four_with_full_catalog() {
    let client = test_client();
    let arrivals = client.new_arrivals().await.unwrap();
    assert_eq!(arrivals.len(), NEW_ARRIVAL_COUNT);
}

#[tokio::test]
async fn related_excludes_source_product() {
    let client = test_client();
    let id = ProductId::new("p5");
    let related = client.related(&id, RELATED_LIMIT).await.unwrap();

    assert_eq!(related.len(), RELATED_LIMIT);
    assert!(related.iter().all(|p| p.id != id));
}

#[tokio::test]
async fn blank_search_is_empty_not_an_error() {
    let client = test_client();
    let results = client.search("").await.unwrap();
    assert!(results.items.is_empty());
    assert_eq!(results.total_items, 0);
}

#[tokio::test]
async fn search_reports_uncapped_total() {
    let client = test_client();
    // Every generated description contains this word
    let results = client.search("comfortable").await.unwrap();
    assert_eq!(results.total_items, TEST_PRODUCT_COUNT);
    assert_eq!(results.items.len(), SEARCH_RESULT_CAP);
}

#[tokio::test]
async fn generation_is_deterministic_per_seed() {
    let a = test_catalog();
    let b = test_catalog();
    assert_eq!(a.products(), b.products());
    assert_eq!(a.categories(), b.categories());
    assert_eq!(a.brands(), b.brands());
}

#[tokio::test]
async fn accessors_run_concurrently() {
    stridewell_integration_tests::init_tracing();
    let client = test_client();

    let filter = FilterSpec::default();
    let (listing, featured, searched) = tokio::join!(
        client.list_products(&filter),
        client.featured(),
        client.search("shoe"),
    );

    assert_eq!(listing.unwrap().total_items(), TEST_PRODUCT_COUNT);
    assert_eq!(featured.unwrap().len(), FEATURED_COUNT);
    assert_eq!(searched.unwrap().total_items, TEST_PRODUCT_COUNT);
}

#[tokio::test]
async fn page_result_serializes_with_derived_metadata() {
    let client = test_client();
    let result = client
        .list_products(&FilterSpec {
            per_page: 10,
            ..FilterSpec::default()
        })
        .await
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["page"], 1);
    assert_eq!(json["per_page"], 10);
    assert_eq!(json["total_items"], 36);
    assert_eq!(json["total_pages"], 4);
    assert_eq!(json["items"].as_array().unwrap().len(), 10);
}
