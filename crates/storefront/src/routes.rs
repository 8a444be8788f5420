//! Routing table for storefront views.
//!
//! | Path            | Route                   |
//! |-----------------|-------------------------|
//! | `/`             | [`Route::Home`]         |
//! | `/cart`         | [`Route::Cart`]         |
//! | `/product/{id}` | [`Route::ProductDetails`] |

use std::fmt;

use corner_shop_core::ProductId;

/// A storefront view selected by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Product listing with search, filters and pagination.
    Home,
    /// Basket contents and total.
    Cart,
    /// Detail page for one product.
    ProductDetails { id: ProductId },
}

impl Route {
    /// Resolve a path to a route.
    ///
    /// Ignores a query string or fragment and a trailing slash. Returns
    /// `None` for unknown paths and non-numeric product ids.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Some(Self::Home),
            "/cart" => Some(Self::Cart),
            _ => {
                let id = trimmed.strip_prefix("/product/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                id.parse().ok().map(|id| Self::ProductDetails { id })
            }
        }
    }

    /// Route name, as shown in navigation.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cart => "cart",
            Self::ProductDetails { .. } => "ProductDetails",
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::ProductDetails { id } => format!("/product/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
