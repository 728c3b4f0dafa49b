//! Represents a product line held in the inventory.
//!
//! Records are loaded once at startup by the [`InventoryStore`](crate::inventory::InventoryStore)
//! and only `quantity` changes afterwards, through fulfillment.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub product_id: ProductId,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

impl InventoryItem {
    /// Creates a new InventoryItem instance.
    ///
    /// # Arguments
    /// * `product_id` - Product key (not required to be unique in the store)
    /// * `price` - Unit price, non-negative
    /// * `quantity` - Units on hand
    /// * `description` - Free-text description written to the result log
    pub fn new(
        product_id: i64,
        price: f64,
        quantity: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            product_id: ProductId(product_id),
            price,
            quantity,
            description: description.into(),
        }
    }
}
