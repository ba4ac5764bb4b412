//! Stridewell storefront library.
//!
//! This crate provides the storefront core as a library: catalog data,
//! the product query engine, the async data client, and the shopping
//! cart. The presentation layer consumes it through plain function calls.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod query;
