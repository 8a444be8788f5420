//! Synchronous catalog state and its mutations.
//!
//! Every mutation here is a single-step assignment that always succeeds.
//! Derived fields (`total_pages`, `skip`) are recomputed inside the mutation
//! that changes their inputs, so they can never drift.

use corner_shop_core::SortOrder;

use crate::api::{Category, Product, ProductQuery, ProductSource, SortSpec};
use crate::config::DEFAULT_PAGE_SIZE;

/// Product listing, categories, and search/sort/pagination parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    categories: Vec<Category>,
    search_query: String,
    selected_category: Option<Category>,
    sort_option: String,
    sort_order: SortOrder,
    current_product: Option<Product>,
    total_products: u32,
    total_pages: u32,
    limit: u32,
    skip: u32,
    current_page: u32,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::with_limit(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogState {
    /// Create an empty catalog with the given page size.
    ///
    /// A zero page size is treated as 1.
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            products: Vec::new(),
            categories: Vec::new(),
            search_query: String::new(),
            selected_category: None,
            sort_option: String::new(),
            sort_order: SortOrder::Asc,
            current_product: None,
            total_products: 0,
            total_pages: 1,
            limit: limit.max(1),
            skip: 0,
            current_page: 1,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the product listing wholesale.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Replace the category list.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Set the search query. An empty string disables search.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Select a category, or clear the selection with `None`.
    pub fn set_selected_category(&mut self, category: Option<Category>) {
        self.selected_category = category;
    }

    /// Set the server-side sort field. An empty string disables sorting.
    pub fn set_sort_option(&mut self, option: impl Into<String>) {
        self.sort_option = option.into();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Record the server-reported product count and recompute `total_pages`.
    pub fn set_total_products(&mut self, total: u32) {
        self.total_products = total;
        self.total_pages = total.div_ceil(self.limit);
    }

    /// Move to a 1-based page and recompute `skip`. Pages below 1 clamp to 1.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1);
        self.skip = (self.current_page - 1).saturating_mul(self.limit);
    }

    /// Change the page size, recomputing both `total_pages` and `skip`.
    ///
    /// A zero page size is treated as 1.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit.max(1);
        self.set_total_products(self.total_products);
        self.set_current_page(self.current_page);
    }

    /// Set (or clear) the product shown on the detail page.
    pub fn set_current_product(&mut self, product: Option<Product>) {
        self.current_product = product;
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Build the listing request described by the current parameters.
    ///
    /// A non-empty search query takes precedence over a selected category.
    #[must_use]
    pub fn product_query(&self) -> ProductQuery {
        let source = if !self.search_query.is_empty() {
            ProductSource::Search(self.search_query.clone())
        } else if let Some(category) = &self.selected_category {
            ProductSource::Category(category.slug.clone())
        } else {
            ProductSource::All
        };

        let sort = (!self.sort_option.is_empty()).then(|| SortSpec {
            field: self.sort_option.clone(),
            order: self.sort_order,
        });

        ProductQuery {
            source,
            limit: self.limit,
            skip: self.skip,
            sort,
        }
    }

    /// Products on the current page, in server order.
    ///
    /// Filtering happens server-side through the query parameters, so this
    /// is exactly the last fetched listing.
    #[must_use]
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Display names of all categories.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Find a loaded category by slug or display name (case-insensitive).
    #[must_use]
    pub fn find_category(&self, key: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.slug.eq_ignore_ascii_case(key) || c.name.eq_ignore_ascii_case(key))
    }

    #[must_use]
    pub const fn current_product(&self) -> Option<&Product> {
        self.current_product.as_ref()
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub const fn total_products(&self) -> u32 {
        self.total_products
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub const fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    #[must_use]
    pub fn sort_option(&self) -> &str {
        &self.sort_option
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub const fn skip(&self) -> u32 {
        self.skip
    }
}
