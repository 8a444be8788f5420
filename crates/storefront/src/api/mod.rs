//! Catalog REST API client.
//!
//! # Architecture
//!
//! - Plain JSON over HTTPS via `reqwest`; five GET endpoint shapes
//! - The remote API is the source of truth - no local sync, no caching
//! - The client only builds URLs and decodes responses; what to do on
//!   failure is decided by the caller (see [`crate::catalog`])
//!
//! # Endpoints
//!
//! - `GET /products` - paginated listing
//! - `GET /products/search?q=` - full-text search
//! - `GET /products/category/{slug}` - listing by category
//! - `GET /products/categories` - category list
//! - `GET /products/{id}` - single product
//!
//! # Example
//!
//! ```rust,ignore
//! use corner_shop_storefront::api::{CatalogClient, ProductQuery, ProductSource};
//!
//! let client = CatalogClient::new(&config.catalog)?;
//!
//! let page = client.list_products(&ProductQuery {
//!     source: ProductSource::Search("phone".to_string()),
//!     limit: 16,
//!     skip: 0,
//!     sort: None,
//! }).await?;
//! ```

mod client;
mod query;
pub mod types;

pub use client::CatalogClient;
pub use query::{ProductQuery, ProductSource, SortSpec};
pub use types::*;

use corner_shop_core::ProductId;
use thiserror::Error;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Product does not exist.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured base URL cannot carry a path.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound(ProductId::new(123));
        assert_eq!(err.to_string(), "Product not found: 123");

        let err = ApiError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - upstream unavailable");
    }
}
