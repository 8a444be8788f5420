//! Plain-text views of catalog and basket state.

use std::io::{self, Write};

use corner_shop_storefront::api::Product;
use corner_shop_storefront::basket::Basket;
use corner_shop_storefront::catalog::CatalogState;

/// Product listing page with the active filters and pagination.
pub fn listing(out: &mut impl Write, state: &CatalogState) -> io::Result<()> {
    let mut filters = Vec::new();
    if !state.search_query().is_empty() {
        filters.push(format!("search \"{}\"", state.search_query()));
    } else if let Some(category) = state.selected_category() {
        filters.push(format!("category {}", category.name));
    }
    if !state.sort_option().is_empty() {
        filters.push(format!("sorted by {} {}", state.sort_option(), state.sort_order()));
    }

    if !filters.is_empty() {
        writeln!(out, "[{}]", filters.join(", "))?;
    }

    if state.all_products().is_empty() {
        writeln!(out, "No products.")?;
    }

    for product in state.all_products() {
        writeln!(
            out,
            "{:>5}  {:<40}  {:>10}  {}",
            product.id.to_string(),
            truncate(&product.title, 40),
            product.price.to_string(),
            product.category
        )?;
    }

    writeln!(
        out,
        "Page {} of {} ({} products)",
        state.current_page(),
        state.total_pages(),
        state.total_products()
    )
}

/// Category list.
pub fn categories(out: &mut impl Write, state: &CatalogState) -> io::Result<()> {
    if state.all_categories().is_empty() {
        return writeln!(out, "No categories.");
    }

    for category in state.all_categories() {
        if category.slug == category.name {
            writeln!(out, "{}", category.slug)?;
        } else {
            writeln!(out, "{:<24}  {}", category.slug, category.name)?;
        }
    }
    Ok(())
}

/// Product detail page.
pub fn product(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "#{} {}", product.id, product.title)?;
    if let Some(brand) = &product.brand {
        writeln!(out, "Brand:     {brand}")?;
    }
    writeln!(out, "Category:  {}", product.category)?;
    writeln!(
        out,
        "Price:     {} ({:.2}% off)",
        product.price, product.discount_percentage
    )?;
    writeln!(out, "Rating:    {:.2} ({} reviews)", product.rating, product.reviews.len())?;
    writeln!(out, "Stock:     {}", product.stock)?;
    if !product.availability_status.is_empty() {
        writeln!(out, "Status:    {}", product.availability_status)?;
    }
    if !product.tags.is_empty() {
        writeln!(out, "Tags:      {}", product.tags.join(", "))?;
    }
    if !product.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", product.description)?;
    }
    Ok(())
}

/// Basket contents and total.
pub fn basket(out: &mut impl Write, basket: &Basket) -> io::Result<()> {
    if basket.is_empty() {
        return writeln!(out, "Your basket is empty.");
    }

    for item in basket.items() {
        writeln!(
            out,
            "{:>5}  {:<40}  {:>4} x {:>10} = {:>10}",
            item.id().to_string(),
            truncate(&item.product().title, 40),
            item.quantity(),
            item.product().price.to_string(),
            item.line_total().to_string()
        )?;
    }

    writeln!(
        out,
        "Total: {} ({} items)",
        basket.total_price(),
        basket.item_count()
    )
}

/// Cut a string to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use corner_shop_core::ProductId;
    use corner_shop_storefront::api::Category;

    fn product(id: i32, title: &str, price: &str) -> Product {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "title": "{title}", "price": {price}, "category": "misc"}}"#
        ))
        .unwrap()
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_basket_view() {
        let mut b = Basket::new();
        b.add(&product(1, "Mug", "20"));
        b.add(&product(1, "Mug", "20"));
        b.add(&product(2, "Spoon", "5"));

        let text = render(|out| basket(out, &b));
        assert!(text.contains("Mug"));
        assert!(text.ends_with("Total: $45.00 (3 items)\n"));
    }

    #[test]
    fn test_empty_basket_view() {
        let text = render(|out| basket(out, &Basket::new()));
        assert_eq!(text, "Your basket is empty.\n");
    }

    #[test]
    fn test_listing_view_shows_filters_and_pages() {
        let mut state = CatalogState::default();
        state.set_search_query("mug");
        state.set_sort_option("price");
        state.set_products(vec![product(4, "Mug", "12.5")]);
        state.set_total_products(1);

        let text = render(|out| listing(out, &state));
        assert!(text.starts_with("[search \"mug\", sorted by price asc]\n"));
        assert!(text.contains("$12.50"));
        assert!(text.ends_with("Page 1 of 1 (1 products)\n"));
    }

    #[test]
    fn test_categories_view() {
        let mut state = CatalogState::default();
        state.set_categories(vec![
            Category::new("beauty", "beauty"),
            Category::new("home-decoration", "Home Decoration"),
        ]);

        let text = render(|out| categories(out, &state));
        assert!(text.starts_with("beauty\n"));
        assert!(text.contains("Home Decoration"));
    }

    #[test]
    fn test_product_view() {
        let p = product(9, "Desk Lamp", "30");
        let text = render(|out| super::product(out, &p));
        assert!(text.starts_with("#9 Desk Lamp\n"));
        assert!(text.contains("Price:     $30.00"));
        assert_eq!(p.id, ProductId::new(9));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }
}
