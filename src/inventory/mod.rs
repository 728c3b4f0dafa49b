//! # Inventory Store
//!
//! Product records shared between the coordinator and the consumer.
//!
//! ## Locking
//!
//! All records sit behind one [`Mutex`]. [`InventoryStore::try_fulfill`]
//! performs the stock check and the decrement under a single acquisition, so
//! any number of concurrent consumers can never oversell a product. The guard
//! never outlives a method call and no other lock is taken while it is held.
//!
//! ## Lookup
//!
//! Product ids are not required to be unique. Lookups stop at the first
//! record with a matching id; later duplicates are kept but never touched by
//! fulfillment.

pub mod error;

pub use error::*;

use crate::framework::RecordReader;
use crate::model::parse::parse_inventory_line;
use crate::model::{FulfillResult, InventoryItem, ParsePolicy, ProductId};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct InventoryStore {
    items: Mutex<Vec<InventoryItem>>,
    skipped_lines: usize,
}

impl InventoryStore {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Mutex::new(items),
            skipped_lines: 0,
        }
    }

    /// Parses one record per line from `source`.
    ///
    /// # Errors
    /// Fails on a read error, or on the first malformed line under
    /// [`ParsePolicy::Abort`].
    pub async fn load<R>(source: R, policy: ParsePolicy) -> Result<Self, InventoryError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut reader = RecordReader::new(source, "inventory", policy);
        let mut items = Vec::new();
        while let Some(item) = reader.next_record(parse_inventory_line).await? {
            debug!(product_id = %item.product_id, quantity = item.quantity, "Loaded item");
            items.push(item);
        }
        info!(size = items.len(), skipped = reader.skipped(), "Inventory loaded");
        Ok(Self {
            items: Mutex::new(items),
            skipped_lines: reader.skipped(),
        })
    }

    /// Opens `path` and loads it with [`InventoryStore::load`].
    ///
    /// # Errors
    /// [`InventoryError::SourceUnreadable`] when the file cannot be opened.
    pub async fn load_file(path: &Path, policy: ParsePolicy) -> Result<Self, InventoryError> {
        let file = File::open(path)
            .await
            .map_err(|source| InventoryError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::load(BufReader::new(file), policy).await
    }

    /// Checks stock for `product_id` and, if there is enough, takes `quantity` units.
    ///
    /// The returned description is empty only when no record matches.
    pub async fn try_fulfill(&self, product_id: ProductId, quantity: u32) -> FulfillResult {
        let mut items = self.items.lock().await;
        let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) else {
            return FulfillResult::not_found();
        };
        match item.quantity.checked_sub(quantity) {
            Some(remaining) => {
                item.quantity = remaining;
                FulfillResult::filled(item.price, item.description.clone())
            }
            None => FulfillResult::insufficient(item.description.clone()),
        }
    }

    /// Quantity on hand for the first record matching `product_id`.
    pub async fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        let items = self.items.lock().await;
        items
            .iter()
            .find(|item| item.product_id == product_id)
            .map(|item| item.quantity)
    }

    /// Copy of every record, in load order.
    pub async fn snapshot(&self) -> Vec<InventoryItem> {
        self.items.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Malformed lines dropped during [`InventoryStore::load`].
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}
