//! Line parsers for the inventory and orders files.
//!
//! Both formats are whitespace separated. An inventory line is
//! `productID price quantity description...` where the description is the
//! rest of the line; an order line is `customerID productID quantityOrdered`.

use crate::model::{InventoryItem, Order};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What a loader does when it meets a malformed line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Log a warning and carry on with the next line.
    #[default]
    Skip,
    /// Stop at the first malformed line and fail.
    Abort,
}

/// A malformed line, with its 1-based position in the source.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: ParseErrorKind,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseErrorKind {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value for `{field}`: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("unexpected trailing input: {0:?}")]
    TrailingInput(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl ParseError {
    fn new(line: usize, reason: ParseErrorKind) -> Self {
        Self { line, reason }
    }
}

/// Splits the next whitespace-delimited field off `input`.
fn next_field(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}

fn field<'a, T: FromStr>(
    rest: &mut &'a str,
    name: &'static str,
) -> Result<T, ParseErrorKind> {
    let (raw, tail) = next_field(*rest).ok_or(ParseErrorKind::MissingField(name))?;
    *rest = tail;
    raw.parse().map_err(|_| ParseErrorKind::InvalidField {
        field: name,
        value: raw.to_string(),
    })
}

/// Parses one inventory record.
///
/// The description is the rest of the line minus the single separator
/// character after the quantity; any further spacing is kept. A missing
/// description reads as empty.
pub fn parse_inventory_line(line_no: usize, line: &str) -> Result<InventoryItem, ParseError> {
    inventory_fields(line).map_err(|reason| ParseError::new(line_no, reason))
}

fn inventory_fields(line: &str) -> Result<InventoryItem, ParseErrorKind> {
    let mut rest = line;
    let product_id: i64 = field(&mut rest, "productID")?;
    let price: f64 = field(&mut rest, "price")?;
    if !price.is_finite() || price < 0.0 {
        return Err(ParseErrorKind::InvalidField {
            field: "price",
            value: price.to_string(),
        });
    }
    let quantity: u32 = field(&mut rest, "quantity")?;
    let description = rest.strip_prefix(char::is_whitespace).unwrap_or(rest);
    Ok(InventoryItem::new(product_id, price, quantity, description))
}

/// Parses one order record. Exactly three fields are accepted and the
/// ordered quantity must be positive.
pub fn parse_order_line(line_no: usize, line: &str) -> Result<Order, ParseError> {
    order_fields(line).map_err(|reason| ParseError::new(line_no, reason))
}

fn order_fields(line: &str) -> Result<Order, ParseErrorKind> {
    let mut rest = line;
    let customer_id: i64 = field(&mut rest, "customerID")?;
    let product_id: i64 = field(&mut rest, "productID")?;
    let quantity: u32 = field(&mut rest, "quantityOrdered")?;
    if quantity == 0 {
        return Err(ParseErrorKind::InvalidField {
            field: "quantityOrdered",
            value: "0".to_string(),
        });
    }
    let trailing = rest.trim();
    if !trailing.is_empty() {
        return Err(ParseErrorKind::TrailingInput(trailing.to_string()));
    }
    Ok(Order::new(customer_id, product_id, quantity))
}
