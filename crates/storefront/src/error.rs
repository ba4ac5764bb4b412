//! Unified error handling for the storefront core.
//!
//! Accessors on the data client return `Result<T, StorefrontError>`. The
//! only data-level failure is a product lookup miss; everything else the
//! client does is a pure function of static data and cannot fail.

use thiserror::Error;

use stridewell_core::ProductId;

use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// No product with the requested id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::ProductNotFound(ProductId::new("p99"));
        assert_eq!(err.to_string(), "Product not found: p99");
    }
}
