//! # Mock Sinks
//!
//! In-memory [`ResultSink`] implementations for exercising the consumer
//! without touching the filesystem.
//!
//! ```rust
//! use order_fulfillment::consumer::Consumer;
//! use order_fulfillment::framework::mock::RecordingSink;
//! use order_fulfillment::inventory::InventoryStore;
//! use order_fulfillment::model::{InventoryItem, Order};
//! use order_fulfillment::order_queue::OrderQueue;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let inventory = Arc::new(InventoryStore::new(vec![InventoryItem::new(1, 2.5, 4, "Bolt")]));
//!     let queue = Arc::new(OrderQueue::new());
//!     queue.append(Order::new(7, 1, 2)).await;
//!
//!     let mut sink = RecordingSink::new();
//!     Consumer::new(queue, inventory).run(&mut sink).await.unwrap();
//!     assert_eq!(sink.records()[0].amount, 5.0);
//!     assert!(sink.is_finished());
//! }
//! ```

use crate::consumer::{ConsumerError, ResultSink};
use crate::model::ResultRecord;
use async_trait::async_trait;

/// Keeps every record it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Vec<ResultRecord>,
    finished: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Whether the consumer called [`ResultSink::finish`].
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn record(&mut self, record: &ResultRecord) -> Result<(), ConsumerError> {
        self.records.push(record.clone());
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), ConsumerError> {
        self.finished = true;
        Ok(())
    }
}

/// Accepts `limit` records, then fails every write.
#[derive(Debug)]
pub struct FailingSink {
    limit: usize,
    accepted: usize,
}

impl FailingSink {
    pub fn after(limit: usize) -> Self {
        Self { limit, accepted: 0 }
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}

#[async_trait]
impl ResultSink for FailingSink {
    async fn record(&mut self, _record: &ResultRecord) -> Result<(), ConsumerError> {
        if self.accepted >= self.limit {
            return Err(ConsumerError::Write(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "sink closed",
            )));
        }
        self.accepted += 1;
        Ok(())
    }
}
