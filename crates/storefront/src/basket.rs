//! Basket module: the items a shopper intends to buy.
//!
//! Items hold a snapshot of the product taken when it was first added, so
//! later catalog fetches never change what is in the basket. The basket is
//! purely in-memory; nothing here performs I/O.

use corner_shop_core::{Price, ProductId};
use tracing::debug;

use crate::api::Product;

/// A product snapshot plus the quantity being bought.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItem {
    product: Product,
    quantity: u32,
}

impl BasketItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product as it was when first added.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Quantity in the basket, never less than 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        // Quantity is kept >= 1 by every mutation; treat anything lower as 1.
        self.quantity.max(1)
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity())
    }
}

/// Ordered basket contents, at most one item per product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity if the product is already in the basket,
    /// otherwise appends a snapshot with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            item.quantity = item.quantity().saturating_add(1);
            debug!(product_id = %product.id, quantity = item.quantity, "Incremented basket item");
        } else {
            self.items.push(BasketItem::new(product.clone()));
            debug!(product_id = %product.id, "Added basket item");
        }
    }

    /// Remove a product. Does nothing if it is not in the basket.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Set the quantity of a product exactly.
    ///
    /// A quantity of zero or less removes the item. Quantities beyond
    /// `u32::MAX` saturate.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity > 0
            && let Some(item) = self.items.iter_mut().find(|i| i.id() == id)
        {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            return;
        }
        self.remove(id);
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Look up the item for a product.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&BasketItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Sum of price times quantity over all items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(BasketItem::line_total).sum()
    }

    /// Total number of units across all items.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
