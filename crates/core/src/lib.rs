//! Corner Shop Core - Shared types library.
//!
//! This crate provides common types used across all Corner Shop components:
//! - `storefront` - Catalog and basket data layer
//! - `cli` - Command-line shopping session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and sort orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
