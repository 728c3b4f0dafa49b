//! # Consumer Task
//!
//! Drains the [`OrderQueue`] and fulfills each order against the
//! [`InventoryStore`], emitting one [`ResultRecord`] per order.
//!
//! ## Lock discipline
//!
//! Per order the consumer:
//! 1. takes the queue lock, reads one order, releases it ([`QueueCursor`](crate::order_queue::QueueCursor));
//! 2. takes the inventory lock for the check-and-decrement, releases it;
//! 3. writes the result row with no lock held.
//!
//! The two locks are never held together.

pub mod error;
pub mod sink;

pub use error::*;
pub use sink::{FixedWidthLog, ResultSink};

use crate::inventory::InventoryStore;
use crate::model::{Outcome, ResultRecord};
use crate::order_queue::OrderQueue;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Counters reported when the consumer finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConsumerSummary {
    pub filled: usize,
    pub rejected: usize,
    pub revenue: f64,
}

impl ConsumerSummary {
    fn observe(&mut self, record: &ResultRecord) {
        match record.outcome {
            Outcome::Filled => {
                self.filled += 1;
                self.revenue += record.amount;
            }
            Outcome::Rejected => self.rejected += 1,
        }
    }

    pub fn processed(&self) -> usize {
        self.filled + self.rejected
    }
}

pub struct Consumer {
    queue: Arc<OrderQueue>,
    inventory: Arc<InventoryStore>,
}

impl Consumer {
    pub fn new(queue: Arc<OrderQueue>, inventory: Arc<InventoryStore>) -> Self {
        Self { queue, inventory }
    }

    /// Processes orders until the queue cursor is exhausted.
    ///
    /// # Errors
    /// Stops at the first failed sink write.
    pub async fn run<S>(self, sink: &mut S) -> Result<ConsumerSummary, ConsumerError>
    where
        S: ResultSink + ?Sized,
    {
        let mut summary = ConsumerSummary::default();
        let mut cursor = self.queue.cursor();

        while let Some(order) = cursor.next_order().await {
            let result = self
                .inventory
                .try_fulfill(order.product_id, order.quantity_ordered)
                .await;
            let record = ResultRecord::from_fulfillment(&order, result);
            debug!(
                customer_id = %record.customer_id,
                product_id = %record.product_id,
                quantity = record.quantity_ordered,
                amount = record.amount,
                outcome = %record.outcome,
                "Order processed"
            );
            summary.observe(&record);
            sink.record(&record).await?;
        }
        sink.finish().await?;

        info!(
            filled = summary.filled,
            rejected = summary.rejected,
            revenue = summary.revenue,
            "Orders processed"
        );
        Ok(summary)
    }

    /// Creates the log file at `path` and runs the consumer into it.
    ///
    /// A log that cannot be created ends the task before any order is
    /// touched; the inventory is left as it was.
    pub async fn run_to_file(self, path: PathBuf) -> Result<ConsumerSummary, ConsumerError> {
        let mut log = match FixedWidthLog::create(&path).await {
            Ok(log) => log,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error opening log file");
                return Ok(ConsumerSummary::default());
            }
        };
        self.run(&mut log).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{FailingSink, RecordingSink};
    use crate::model::{InventoryItem, Order, ProductId};

    async fn setup(items: Vec<InventoryItem>, orders: Vec<Order>) -> (Arc<OrderQueue>, Arc<InventoryStore>) {
        let queue = Arc::new(OrderQueue::new());
        for order in orders {
            queue.append(order).await;
        }
        (queue, Arc::new(InventoryStore::new(items)))
    }

    #[tokio::test]
    async fn second_order_rejected_when_stock_runs_short() {
        let (queue, inventory) = setup(
            vec![InventoryItem::new(1, 10.0, 5, "Widget")],
            vec![Order::new(100, 1, 3), Order::new(101, 1, 3)],
        )
        .await;

        let mut sink = RecordingSink::new();
        let summary = Consumer::new(queue, Arc::clone(&inventory))
            .run(&mut sink)
            .await
            .unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, Outcome::Filled);
        assert_eq!(records[0].amount, 30.0);
        assert_eq!(records[1].outcome, Outcome::Rejected);
        assert_eq!(records[1].amount, 0.0);
        assert_eq!(records[1].description, "Widget");
        assert_eq!(inventory.quantity_of(ProductId(1)).await, Some(2));
        assert_eq!(summary, ConsumerSummary { filled: 1, rejected: 1, revenue: 30.0 });
        assert!(sink.is_finished());
    }

    #[tokio::test]
    async fn unknown_product_is_rejected_with_empty_description() {
        let (queue, inventory) = setup(
            vec![InventoryItem::new(1, 10.0, 5, "Widget")],
            vec![Order::new(100, 999, 1)],
        )
        .await;

        let mut sink = RecordingSink::new();
        Consumer::new(queue, inventory).run(&mut sink).await.unwrap();

        let record = &sink.records()[0];
        assert_eq!(record.outcome, Outcome::Rejected);
        assert!(record.description.is_empty());
        assert_eq!(record.amount, 0.0);
    }

    #[tokio::test]
    async fn filled_quantities_sum_to_stock_consumed() {
        let initial = 17;
        let orders: Vec<Order> = [4, 1, 9, 3, 2, 6, 1].iter().map(|&q| Order::new(1, 1, q)).collect();
        let (queue, inventory) = setup(vec![InventoryItem::new(1, 1.5, initial, "Nut")], orders).await;

        let mut sink = RecordingSink::new();
        Consumer::new(queue, Arc::clone(&inventory)).run(&mut sink).await.unwrap();

        let filled: u32 = sink
            .records()
            .iter()
            .filter(|r| r.outcome == Outcome::Filled)
            .map(|r| r.quantity_ordered)
            .sum();
        let remaining = inventory.quantity_of(ProductId(1)).await.unwrap();
        assert_eq!(filled, initial - remaining);
    }

    #[tokio::test]
    async fn empty_queue_still_finishes_the_sink() {
        let (queue, inventory) = setup(vec![], vec![]).await;

        let mut sink = RecordingSink::new();
        let summary = Consumer::new(queue, inventory).run(&mut sink).await.unwrap();

        assert_eq!(summary.processed(), 0);
        assert!(sink.records().is_empty());
        assert!(sink.is_finished());
    }

    #[tokio::test]
    async fn write_failure_stops_processing() {
        let (queue, inventory) = setup(
            vec![InventoryItem::new(1, 1.0, 10, "Peg")],
            vec![Order::new(1, 1, 1), Order::new(2, 1, 1), Order::new(3, 1, 1)],
        )
        .await;

        let mut sink = FailingSink::after(1);
        let err = Consumer::new(queue, Arc::clone(&inventory))
            .run(&mut sink)
            .await
            .unwrap_err();

        assert!(matches!(err, ConsumerError::Write(_)));
        assert_eq!(sink.accepted(), 1);
        // The failing order was fulfilled before its row could be written.
        assert_eq!(inventory.quantity_of(ProductId(1)).await, Some(8));
    }
}
