//! Represents a customer order as read from the orders source.
//!
//! Orders are immutable once ingested; the [`OrderQueue`](crate::order_queue::OrderQueue)
//! hands out clones.

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity_ordered: u32,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `customer_id` - Customer placing the order
    /// * `product_id` - Product being ordered
    /// * `quantity_ordered` - Units requested, always positive for parsed orders
    pub fn new(
        customer_id: i64,
        product_id: i64,
        quantity_ordered: u32,
    ) -> Self {
        Self {
            customer_id: CustomerId(customer_id),
            product_id: ProductId(product_id),
            quantity_ordered,
        }
    }
}
