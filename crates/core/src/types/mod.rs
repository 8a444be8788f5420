//! Core types for Corner Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod sort;

pub use id::*;
pub use price::Price;
pub use sort::{SortOrder, SortOrderError};
