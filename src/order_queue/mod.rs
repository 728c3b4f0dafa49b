//! # Order Queue
//!
//! Append-only sequence of ingested orders, shared between the producer
//! (writer) and the consumer (reader) behind one [`Mutex`]. Insertion order is
//! processing order.
//!
//! ## Weakly consistent iteration
//!
//! A [`QueueCursor`] takes the lock for exactly one element per step and
//! releases it before returning. Appends may therefore interleave with a
//! traversal:
//!
//! - an element present before the cursor reaches its index is yielded
//!   exactly once;
//! - an element appended while the cursor is mid-traversal is seen only if
//!   it lands before the cursor runs off the end.
//!
//! Callers that need a point-in-time view use [`OrderQueue::snapshot`].

use crate::model::Order;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct OrderQueue {
    orders: Mutex<Vec<Order>>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `order` to the back of the queue.
    pub async fn append(&self, order: Order) {
        self.orders.lock().await.push(order);
    }

    /// Weakly consistent cursor starting at the front of the queue.
    pub fn cursor(&self) -> QueueCursor<'_> {
        QueueCursor {
            queue: self,
            position: 0,
        }
    }

    /// Materialized copy of the queue under a single lock acquisition.
    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.orders.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.lock().await.is_empty()
    }
}

/// Reads the queue one element per lock acquisition.
#[derive(Debug)]
pub struct QueueCursor<'a> {
    queue: &'a OrderQueue,
    position: usize,
}

impl QueueCursor<'_> {
    /// Next order, or `None` when the cursor has caught up with the queue.
    pub async fn next_order(&mut self) -> Option<Order> {
        let orders = self.queue.orders.lock().await;
        let order = orders.get(self.position).cloned()?;
        self.position += 1;
        Some(order)
    }

    /// Number of orders yielded so far.
    pub fn position(&self) -> usize {
        self.position
    }
}
