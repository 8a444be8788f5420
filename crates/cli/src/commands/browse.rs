//! One-shot catalog commands.

use std::io::Write;

use corner_shop_core::{ProductId, SortOrder};
use corner_shop_storefront::api::Category;
use corner_shop_storefront::error::{AppError, Result};
use corner_shop_storefront::state::AppState;
use tracing::info;

use crate::render;

/// Listing filters given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: SortOrder,
    pub page: u32,
}

/// Print one page of products.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub async fn products<W: Write>(
    state: &AppState,
    options: ListingOptions,
    out: &mut W,
) -> Result<()> {
    let catalog = state.catalog();

    catalog.update(|s| {
        if let Some(search) = options.search {
            s.set_search_query(search);
        }
        if let Some(slug) = options.category {
            // The category endpoint only needs the slug; no lookup required.
            s.set_selected_category(Some(Category::new(slug.clone(), slug)));
        }
        if let Some(field) = options.sort {
            s.set_sort_option(field);
        }
        s.set_sort_order(options.order);
        s.set_current_page(options.page);
    });

    info!(query = ?catalog.read().product_query(), "Listing products");
    catalog.fetch_products().await;
    render::listing(out, &catalog.read())?;
    Ok(())
}

/// Print all categories.
///
/// # Errors
///
/// Returns an error if writing output fails.
pub async fn categories<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    state.catalog().fetch_categories().await;
    render::categories(out, &state.catalog().read())?;
    Ok(())
}

/// Print one product's details.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product could not be loaded, or an
/// error if writing output fails.
pub async fn product<W: Write>(state: &AppState, id: ProductId, out: &mut W) -> Result<()> {
    state.catalog().fetch_product_by_id(id).await;
    let current = state.catalog().read().current_product().cloned();

    let product = current.ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    render::product(out, &product)?;
    Ok(())
}
