//! Integration test support for Stridewell.
//!
//! The tests live in `tests/`; this library holds the shared fixtures:
//! a deterministic catalog, a zero-latency client, and a tracing
//! subscriber for debugging failing runs.

use stridewell_storefront::catalog::CatalogStore;
use stridewell_storefront::client::StorefrontClient;
use stridewell_storefront::config::{CatalogConfig, LatencyProfile};

/// Seed shared by every integration test; results are deterministic.
pub const TEST_SEED: u64 = 1;

/// Product count matching the stock demo catalog.
pub const TEST_PRODUCT_COUNT: usize = 36;

/// A deterministic catalog for the standard test fixture.
#[must_use]
pub fn test_catalog() -> CatalogStore {
    CatalogStore::generate(&CatalogConfig {
        seed: TEST_SEED,
        product_count: TEST_PRODUCT_COUNT,
    })
}

/// A client over [`test_catalog`] with latency disabled, so tests run at
/// full speed while still crossing the async boundary.
#[must_use]
pub fn test_client() -> StorefrontClient {
    StorefrontClient::new(test_catalog(), LatencyProfile::none())
}

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
///
/// Call from a test to see client/catalog logs while debugging.
pub fn init_tracing() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
