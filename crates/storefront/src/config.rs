//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults reproduce the stock demo catalog.
//!
//! - `STRIDEWELL_CATALOG_SEED` - RNG seed for catalog generation (default: 7)
//! - `STRIDEWELL_PRODUCT_COUNT` - number of generated products (default: 36)
//! - `STRIDEWELL_LATENCY_MIN_MS` - lower bound of the simulated request
//!   latency in milliseconds (default: 400)
//! - `STRIDEWELL_LATENCY_MAX_MS` - upper bound of the simulated request
//!   latency in milliseconds (default: 800)

use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Default catalog generation seed.
pub const DEFAULT_CATALOG_SEED: u64 = 7;

/// Default number of generated products.
pub const DEFAULT_PRODUCT_COUNT: usize = 36;

/// Default simulated latency bounds in milliseconds.
pub const DEFAULT_LATENCY_MS: (u64, u64) = (400, 800);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog generation parameters
    pub catalog: CatalogConfig,
    /// Simulated request latency
    pub latency: LatencyProfile,
}

/// Catalog generation parameters.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// RNG seed; the same seed always yields the same catalog
    pub seed: u64,
    /// Number of products to generate
    pub product_count: usize,
}

/// Bounds for the simulated per-request latency.
///
/// Each data client request draws a uniform delay from `[min, max]`
/// before resolving, modeling a network round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    min_ms: u64,
    max_ms: u64,
}

impl LatencyProfile {
    /// Build a profile from millisecond bounds, ordering them if reversed.
    #[must_use]
    pub const fn from_bounds(min_ms: u64, max_ms: u64) -> Self {
        if min_ms <= max_ms {
            Self { min_ms, max_ms }
        } else {
            Self {
                min_ms: max_ms,
                max_ms: min_ms,
            }
        }
    }

    /// A zero-latency profile; requests resolve without suspending.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    /// Draw one request delay from the profile.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.max_ms == 0 {
            return Duration::ZERO;
        }
        let ms = rand::rng().random_range(self.min_ms..=self.max_ms);
        Duration::from_millis(ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from_bounds(DEFAULT_LATENCY_MS.0, DEFAULT_LATENCY_MS.1)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_CATALOG_SEED,
            product_count: DEFAULT_PRODUCT_COUNT,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            latency: LatencyProfile::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or
    /// if the latency bounds are inverted.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let seed = get_parsed_env("STRIDEWELL_CATALOG_SEED", DEFAULT_CATALOG_SEED)?;
        let product_count = get_parsed_env("STRIDEWELL_PRODUCT_COUNT", DEFAULT_PRODUCT_COUNT)?;
        let min_ms = get_parsed_env("STRIDEWELL_LATENCY_MIN_MS", DEFAULT_LATENCY_MS.0)?;
        let max_ms = get_parsed_env("STRIDEWELL_LATENCY_MAX_MS", DEFAULT_LATENCY_MS.1)?;

        if min_ms > max_ms {
            return Err(ConfigError::InvalidEnvVar(
                "STRIDEWELL_LATENCY_MIN_MS".to_string(),
                format!("lower bound {min_ms} exceeds STRIDEWELL_LATENCY_MAX_MS {max_ms}"),
            ));
        }

        Ok(Self {
            catalog: CatalogConfig {
                seed,
                product_count,
            },
            latency: LatencyProfile::from_bounds(min_ms, max_ms),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable parsed to `T`, or the default when unset.
fn get_parsed_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_var(key, &raw),
        Err(_) => Ok(default),
    }
}

/// Parse a raw variable value, mapping failures to a descriptive error.
fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
