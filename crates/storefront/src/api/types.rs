//! Domain types for the catalog REST API.
//!
//! Products are opaque pass-through data for the storefront: only `id`,
//! `price` and `category` are ever interpreted. Everything else is decoded
//! leniently so a sparse record never fails a whole listing page: missing
//! or `null` fields take their default, and unparseable timestamps become
//! `None`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use corner_shop_core::{Price, ProductId};

// =============================================================================
// Lenient Field Decoding
// =============================================================================

/// Decode a field, treating `null` like a missing value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
///
/// Any other value (wrong type, unknown format, `null`) decodes as `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

// =============================================================================
// Product Types
// =============================================================================

/// Physical dimensions of a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDimensions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub depth: f64,
}

/// Record-keeping metadata attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    /// Creation timestamp.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Barcode value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub barcode: String,
    /// URL of a QR code image.
    #[serde(default, deserialize_with = "null_as_default")]
    pub qr_code: String,
}

/// A customer review.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    /// Star rating (1-5), zero when missing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Review text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    /// When the review was posted.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub date: Option<DateTime<Utc>>,
    /// Reviewer display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewer_name: String,
    /// Reviewer email address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewer_email: String,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Plain text description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Category slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Thumbnail image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Units in stock.
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Brand name (absent for unbranded goods).
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimensions: ProductDimensions,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warranty_information: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping_information: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub return_policy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub minimum_order_quantity: u32,
    #[serde(default)]
    pub meta: Option<ProductMeta>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<ProductReview>,
    /// Gallery image URLs, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page, in server order.
    pub products: Vec<Product>,
    /// Total number of products matching the query across all pages.
    pub total: u32,
    /// Offset echoed back by the server.
    #[serde(default)]
    pub skip: Option<u32>,
    /// Page size echoed back by the server.
    #[serde(default)]
    pub limit: Option<u32>,
}

// =============================================================================
// Category Types
// =============================================================================

/// A product grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    /// URL-safe identifier used in `/products/category/{slug}`.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
}

impl Category {
    /// Create a category from a slug and display name.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Wire shapes accepted for a category entry.
///
/// The categories endpoint has returned both a flat list of names and a list
/// of `{slug, name, url}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    Name(String),
    Full { slug: String, name: String },
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match CategoryRepr::deserialize(deserializer)? {
            CategoryRepr::Name(name) => Self {
                slug: name.clone(),
                name,
            },
            CategoryRepr::Full { slug, name } => Self { slug, name },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_minimal_fields() {
        let product: Product =
            serde_json::from_str(r#"{"id": 3, "title": "Lamp", "price": 12.5}"#).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Price::from_cents(1250));
        assert!(product.brand.is_none());
        assert!(product.meta.is_none());
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_product_full_record() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "Popular mascara",
            "category": "beauty",
            "price": 9.99,
            "discountPercentage": 7.17,
            "rating": 4.94,
            "stock": 5,
            "tags": ["beauty", "mascara"],
            "brand": "Essence",
            "sku": "RCH45Q1A",
            "weight": 2,
            "dimensions": {"width": 23.17, "height": 14.43, "depth": 28.01},
            "warrantyInformation": "1 month warranty",
            "shippingInformation": "Ships in 1 month",
            "availabilityStatus": "Low Stock",
            "reviews": [{
                "rating": 2,
                "comment": "Very unhappy with my purchase!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "John Doe",
                "reviewerEmail": "john.doe@x.dummyjson.com"
            }],
            "returnPolicy": "30 days return policy",
            "minimumOrderQuantity": 24,
            "meta": {
                "createdAt": "2024-05-23T08:56:21.618Z",
                "updatedAt": "2024-05-23T08:56:21.618Z",
                "barcode": "9164035109868",
                "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
            },
            "images": ["https://cdn.dummyjson.com/products/images/1.png"],
            "thumbnail": "https://cdn.dummyjson.com/products/images/thumbnail.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, "beauty");
        assert_eq!(product.tags, vec!["beauty", "mascara"]);
        assert_eq!(product.brand.as_deref(), Some("Essence"));
        assert_eq!(product.minimum_order_quantity, 24);
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews.first().unwrap().reviewer_name, "John Doe");
        assert_eq!(product.meta.unwrap().barcode, "9164035109868");
    }

    #[test]
    fn test_product_page_tolerates_odd_pass_through_fields() {
        let json = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Kettle",
                    "price": 20,
                    "category": "kitchen",
                    "sku": null,
                    "tags": null,
                    "dimensions": {"width": null, "height": 1.5},
                    "meta": {"createdAt": "2024-05-23", "updatedAt": "yesterday", "barcode": null},
                    "reviews": [
                        {"comment": "ok"},
                        {"rating": null, "date": 1716454581}
                    ]
                },
                {"id": 2, "title": "Mug", "price": 5, "category": "kitchen"}
            ],
            "total": 2
        }"#;

        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.products.len(), 2);

        let kettle = page.products.first().unwrap();
        assert_eq!(kettle.price, Price::from_cents(2000));
        assert_eq!(kettle.sku, "");
        assert!(kettle.tags.is_empty());
        assert!((kettle.dimensions.height - 1.5).abs() < f64::EPSILON);

        let meta = kettle.meta.as_ref().unwrap();
        assert_eq!(
            meta.created_at.map(|dt| dt.to_rfc3339()),
            Some("2024-05-23T00:00:00+00:00".to_string())
        );
        assert!(meta.updated_at.is_none());
        assert_eq!(meta.barcode, "");

        let reviews = &kettle.reviews;
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews.first().unwrap().comment, "ok");
        assert!(reviews.first().unwrap().rating.abs() < f64::EPSILON);
        assert!(reviews.get(1).unwrap().date.is_none());
    }

    #[test]
    fn test_review_rfc3339_date() {
        let review: ProductReview =
            serde_json::from_str(r#"{"rating": 4, "date": "2024-05-23T08:56:21.618Z"}"#).unwrap();
        assert_eq!(
            review.date.map(|dt| dt.date_naive()),
            NaiveDate::from_ymd_opt(2024, 5, 23)
        );
    }

    #[test]
    fn test_category_from_name() {
        let categories: Vec<Category> =
            serde_json::from_str(r#"["beauty", "home-decoration"]"#).unwrap();
        assert_eq!(
            categories.get(1),
            Some(&Category::new("home-decoration", "home-decoration"))
        );
    }

    #[test]
    fn test_category_from_object() {
        let categories: Vec<Category> = serde_json::from_str(
            r#"[{"slug": "home-decoration", "name": "Home Decoration", "url": "https://dummyjson.com/products/category/home-decoration"}]"#,
        )
        .unwrap();
        assert_eq!(categories, vec![Category::new("home-decoration", "Home Decoration")]);
    }

    #[test]
    fn test_product_page_without_echo_fields() {
        let page: ProductPage = serde_json::from_str(r#"{"products": [], "total": 0}"#).unwrap();
        assert_eq!(page.total, 0);
        assert!(page.skip.is_none());
    }
}
