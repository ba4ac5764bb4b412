//! Stridewell Core - Shared types library.
//!
//! This crate provides common types used across all Stridewell components:
//! - `storefront` - Catalog, query engine, mock data client, and cart
//! - `integration-tests` - Cross-crate behavioral tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async, no generated
//! data. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
