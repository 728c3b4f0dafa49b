//! Outcome types produced while fulfilling an [`Order`].

use crate::model::{CustomerId, Order, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Final state of a single order. Every order starts out pending and ends in
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Filled,
    Rejected,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Filled => f.write_str("Filled"),
            Outcome::Rejected => f.write_str("Rejected"),
        }
    }
}

/// What the inventory reports back for one fulfillment attempt.
///
/// - matched with enough stock: `filled`, price and description set
/// - matched without enough stock: not `filled`, description set, price 0
/// - no match: not `filled`, empty description, price 0
#[derive(Debug, Clone, PartialEq)]
pub struct FulfillResult {
    pub filled: bool,
    pub unit_price: f64,
    pub description: String,
}

impl FulfillResult {
    pub fn filled(unit_price: f64, description: impl Into<String>) -> Self {
        Self {
            filled: true,
            unit_price,
            description: description.into(),
        }
    }

    pub fn insufficient(description: impl Into<String>) -> Self {
        Self {
            filled: false,
            unit_price: 0.0,
            description: description.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            filled: false,
            unit_price: 0.0,
            description: String::new(),
        }
    }

    /// Transaction amount for `quantity` units; zero unless filled.
    pub fn amount(&self, quantity: u32) -> f64 {
        if self.filled {
            f64::from(quantity) * self.unit_price
        } else {
            0.0
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.filled {
            Outcome::Filled
        } else {
            Outcome::Rejected
        }
    }
}

/// One row of the result log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub description: String,
    pub quantity_ordered: u32,
    pub amount: f64,
    pub outcome: Outcome,
}

impl ResultRecord {
    pub fn from_fulfillment(order: &Order, result: FulfillResult) -> Self {
        Self {
            customer_id: order.customer_id,
            product_id: order.product_id,
            amount: result.amount(order.quantity_ordered),
            outcome: result.outcome(),
            quantity_ordered: order.quantity_ordered,
            description: result.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_amount_is_quantity_times_price() {
        let result = FulfillResult::filled(10.0, "Widget");
        assert_eq!(result.amount(3), 30.0);
        assert_eq!(result.outcome(), Outcome::Filled);
    }

    #[test]
    fn rejected_results_carry_zero_amount() {
        let order = Order::new(101, 1, 3);

        let insufficient = ResultRecord::from_fulfillment(&order, FulfillResult::insufficient("Widget"));
        assert_eq!(insufficient.amount, 0.0);
        assert_eq!(insufficient.description, "Widget");
        assert_eq!(insufficient.outcome, Outcome::Rejected);

        let missing = ResultRecord::from_fulfillment(&order, FulfillResult::not_found());
        assert_eq!(missing.amount, 0.0);
        assert!(missing.description.is_empty());
        assert_eq!(missing.outcome, Outcome::Rejected);
    }
}
