//! Catalog module: product listing, categories, and the detail product.
//!
//! [`CatalogState`] holds the data and the synchronous mutations;
//! [`Catalog`] pairs it with a [`CatalogClient`] and runs the three fetch
//! actions against the remote API.
//!
//! # Failure policy
//!
//! Fetch actions never return errors. A failed listing or category fetch is
//! logged and leaves the previous state untouched; a failed detail fetch is
//! logged and clears the current product. Callers cannot tell "not found"
//! from "request failed" - both leave `current_product()` empty.
//!
//! # Concurrency
//!
//! The state lock is never held across a network await: each fetch reads
//! its parameters, releases the lock, waits for the response, then commits.
//! Overlapping fetches therefore resolve last-response-wins.

mod state;

pub use state::CatalogState;

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use corner_shop_core::{ProductId, SortOrder};
use tracing::{error, info, instrument};

use crate::api::{CatalogClient, Category, Product};

/// Catalog state bound to the API client that feeds it.
pub struct Catalog {
    client: CatalogClient,
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// Create an empty catalog with the given page size.
    #[must_use]
    pub fn new(client: CatalogClient, limit: u32) -> Self {
        Self {
            client,
            state: RwLock::new(CatalogState::with_limit(limit)),
        }
    }

    /// Get a reference to the API client.
    #[must_use]
    pub const fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Read access to the current state.
    ///
    /// Do not hold the guard across an `.await`.
    pub fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a mutation to the state.
    pub fn update<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> R {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.update(|s| s.set_search_query(query));
    }

    pub fn set_selected_category(&self, category: Option<Category>) {
        self.update(|s| s.set_selected_category(category));
    }

    pub fn set_sort_option(&self, option: impl Into<String>) {
        self.update(|s| s.set_sort_option(option));
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.update(|s| s.set_sort_order(order));
    }

    pub fn set_current_page(&self, page: u32) {
        self.update(|s| s.set_current_page(page));
    }

    pub fn set_current_product(&self, product: Option<Product>) {
        self.update(|s| s.set_current_product(product));
    }

    // =========================================================================
    // Fetch Actions
    // =========================================================================

    /// Fetch the listing page described by the current parameters.
    ///
    /// On success replaces the products and the total count. On failure
    /// logs and keeps the previous listing.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) {
        let query = self.read().product_query();

        match self.client.list_products(&query).await {
            Ok(page) => {
                info!(
                    count = page.products.len(),
                    total = page.total,
                    "Fetched products"
                );
                self.update(|s| {
                    s.set_products(page.products);
                    s.set_total_products(page.total);
                });
            }
            Err(e) => {
                error!(error = %e, source = ?query.source, "Failed to fetch products");
            }
        }
    }

    /// Fetch the category list.
    ///
    /// On failure logs and keeps the previous categories.
    #[instrument(skip(self))]
    pub async fn fetch_categories(&self) {
        match self.client.list_categories().await {
            Ok(categories) => {
                info!(count = categories.len(), "Fetched categories");
                self.update(|s| s.set_categories(categories));
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch categories");
            }
        }
    }

    /// Fetch one product into the detail slot.
    ///
    /// On failure (including not found) logs and clears the current product.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn fetch_product_by_id(&self, id: ProductId) {
        match self.client.get_product(id).await {
            Ok(product) => self.set_current_product(Some(product)),
            Err(e) => {
                error!(error = %e, product_id = %id, "Failed to fetch product");
                self.set_current_product(None);
            }
        }
    }
}
