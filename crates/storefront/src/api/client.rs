//! HTTP client for the catalog REST API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use corner_shop_core::ProductId;

use super::query::{ProductQuery, ProductSource};
use super::types::{Category, Product, ProductPage};
use super::ApiError;
use crate::config::CatalogApiConfig;

/// Maximum number of body characters kept in error messages and logs.
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for the catalog REST API.
///
/// Cheaply cloneable; clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a new catalog API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path or the HTTP
    /// client fails to build.
    pub fn new(config: &CatalogApiConfig) -> Result<Self, ApiError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("corner-shop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                base_url: config.base_url.clone(),
            }),
        })
    }

    /// Base URL all endpoints are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build a URL from the base plus extra path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build the listing URL for a product query.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot carry a path.
    pub fn products_url(&self, query: &ProductQuery) -> Result<Url, ApiError> {
        let mut url = match &query.source {
            ProductSource::All => self.endpoint(&["products"])?,
            ProductSource::Search(_) => self.endpoint(&["products", "search"])?,
            ProductSource::Category(slug) => {
                self.endpoint(&["products", "category", slug.as_str()])?
            }
        };

        url.query_pairs_mut()
            .extend_pairs(query.query_pairs());

        Ok(url)
    }

    /// Execute a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(url = %url, "Catalog API request");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body.chars().take(ERROR_BODY_PREVIEW).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
                "Failed to parse catalog API response"
            );
            ApiError::Parse(e)
        })
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch one page of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body cannot be decoded.
    #[instrument(skip(self), fields(limit = query.limit, skip = query.skip))]
    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductPage, ApiError> {
        let url = self.products_url(query)?;
        self.get_json(url).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` on a 404, or another error if the
    /// request fails or the body cannot be decoded.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.endpoint(&["products", id.to_string().as_str()])?;

        match self.get_json(url).await {
            Err(ApiError::Api { status: 404, .. }) => Err(ApiError::NotFound(id)),
            other => other,
        }
    }

    // =========================================================================
    // Category Methods
    // =========================================================================

    /// Fetch all product categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint(&["products", "categories"])?;
        self.get_json(url).await
    }
}
