//! Top-level error for a fulfillment run.

use crate::consumer::ConsumerError;
use crate::framework::{FrameworkError, RecordError};
use crate::inventory::InventoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("inventory load failed: {0}")]
    Inventory(#[from] InventoryError),

    #[error("order ingestion failed: {0}")]
    Orders(#[from] RecordError),

    #[error("order processing failed: {0}")]
    Consumer(#[from] ConsumerError),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}
