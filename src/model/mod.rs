//! Pure data structures shared by the inventory, the queue and the two tasks.

pub mod fulfillment;
pub mod order;
pub mod parse;
pub mod product;

pub use fulfillment::*;
pub use order::*;
pub use parse::{ParseError, ParseErrorKind, ParsePolicy};
pub use product::*;
