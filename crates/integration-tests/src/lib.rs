//! Integration tests for Corner Shop.
//!
//! Tests run the storefront data layer end to end against a `mockito`
//! server standing in for the catalog API, so no network access is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p corner-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `basket_scenario` - Adding, updating and totalling basket items
//! - `catalog_sync` - Listing, search, pagination and detail fetches

use corner_shop_storefront::api::Product;
use corner_shop_storefront::config::{CatalogApiConfig, StorefrontConfig};
use corner_shop_storefront::state::AppState;
use serde_json::{Value, json};
use url::Url;

/// JSON for a product with the fields the storefront interprets.
#[must_use]
pub fn product_json(id: i32, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "category": "misc",
        "stock": 10,
        "tags": ["test"],
    })
}

/// Decode a product from [`product_json`].
///
/// # Panics
///
/// Panics if the fixture does not decode, which is a bug in the fixture.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: i32, title: &str, price: f64) -> Product {
    serde_json::from_value(product_json(id, title, price)).unwrap()
}

/// JSON body for a listing page of products `first..=last` out of `total`.
#[must_use]
pub fn listing_json(first: i32, last: i32, total: u32) -> String {
    let products: Vec<Value> = (first..=last)
        .map(|id| product_json(id, &format!("Item {id}"), 10.0))
        .collect();
    json!({ "products": products, "total": total }).to_string()
}

/// Application state pointed at a mock catalog server.
///
/// # Panics
///
/// Panics if `base_url` is not a valid URL.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn state_for(base_url: &str) -> AppState {
    AppState::new(StorefrontConfig {
        catalog: CatalogApiConfig {
            base_url: Url::parse(base_url).unwrap(),
            page_size: 16,
        },
        sentry_dsn: None,
        sentry_environment: None,
    })
    .unwrap()
}
