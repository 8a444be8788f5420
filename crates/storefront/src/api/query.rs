//! Product listing query parameters.

use corner_shop_core::SortOrder;

/// Which listing endpoint a query targets.
///
/// The three shapes are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductSource {
    /// `GET /products`
    All,
    /// `GET /products/search?q=`
    Search(String),
    /// `GET /products/category/{slug}`
    Category(String),
}

/// Server-side sort applied to a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Product field name sent as `sortBy=`.
    pub field: String,
    /// Direction sent as `order=`.
    pub order: SortOrder,
}

/// A fully resolved product listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub source: ProductSource,
    pub limit: u32,
    pub skip: u32,
    pub sort: Option<SortSpec>,
}

impl ProductQuery {
    /// Query pairs in the order they are sent.
    ///
    /// `limit` and `skip` are always present, `q` only for searches, and
    /// `sortBy`/`order` only when a sort is set.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.limit.to_string()), ("skip", self.skip.to_string())];

        if let ProductSource::Search(q) = &self.source {
            pairs.push(("q", q.clone()));
        }

        if let Some(sort) = &self.sort {
            pairs.push(("sortBy", sort.field.clone()));
            pairs.push(("order", sort.order.as_str().to_string()));
        }

        pairs
    }
}
