//! Application state shared across the storefront.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use crate::api::{ApiError, CatalogClient};
use crate::basket::Basket;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Root state container: configuration, catalog, and basket.
///
/// Created once at startup and handed to whichever layer needs it. Cheaply
/// cloneable via `Arc`; clones share the same catalog and basket. The
/// catalog and basket never read each other's data and are locked
/// independently.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    basket: RwLock<Basket>,
}

impl AppState {
    /// Create a new application state with an empty catalog and basket.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog API client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let client = CatalogClient::new(&config.catalog)?;
        let catalog = Catalog::new(client, config.catalog.page_size);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                basket: RwLock::new(Basket::new()),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Read access to the basket.
    pub fn basket(&self) -> RwLockReadGuard<'_, Basket> {
        self.inner
            .basket
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a mutation to the basket.
    pub fn update_basket<R>(&self, f: impl FnOnce(&mut Basket) -> R) -> R {
        let mut basket = self
            .inner
            .basket
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut basket)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::Product;
    use crate::config::CatalogApiConfig;
    use corner_shop_core::ProductId;

    fn state() -> AppState {
        AppState::new(StorefrontConfig {
            catalog: CatalogApiConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
        })
        .unwrap()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = state();
        assert!(state.basket().is_empty());
        assert!(state.catalog().read().all_products().is_empty());
        assert_eq!(state.catalog().read().limit(), 16);
    }

    #[test]
    fn test_clones_share_basket() {
        let state = state();
        let other = state.clone();
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Soap", "price": 3}"#).unwrap();

        other.update_basket(|b| b.add(&product));
        assert_eq!(state.basket().get(ProductId::new(1)).unwrap().quantity(), 1);
    }
}
