//! # Producer Task
//!
//! Reads `customerID productID quantityOrdered` lines from an order source
//! and appends each parsed [`Order`](crate::model::Order) to the shared
//! [`OrderQueue`]. Runs once to completion.
//!
//! An orders file that cannot be opened is not an error for the run: the
//! task logs a diagnostic and finishes with nothing appended.

use crate::framework::{RecordError, RecordReader};
use crate::model::parse::parse_order_line;
use crate::model::ParsePolicy;
use crate::order_queue::OrderQueue;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{debug, error, info};

/// Counters reported when the producer finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProducerSummary {
    pub appended: usize,
    pub skipped: usize,
}

pub struct Producer {
    queue: Arc<OrderQueue>,
    policy: ParsePolicy,
}

impl Producer {
    pub fn new(queue: Arc<OrderQueue>, policy: ParsePolicy) -> Self {
        Self { queue, policy }
    }

    /// Drains `source` into the queue.
    ///
    /// # Errors
    /// A read failure, or the first malformed line under [`ParsePolicy::Abort`].
    /// Orders appended before the failure stay in the queue.
    pub async fn run<R>(self, source: R) -> Result<ProducerSummary, RecordError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut reader = RecordReader::new(source, "orders", self.policy);
        let mut appended = 0;
        while let Some(order) = reader.next_record(parse_order_line).await? {
            debug!(customer_id = %order.customer_id, product_id = %order.product_id, quantity = order.quantity_ordered, "Order received");
            self.queue.append(order).await;
            appended += 1;
        }

        let summary = ProducerSummary {
            appended,
            skipped: reader.skipped(),
        };
        info!(appended = summary.appended, skipped = summary.skipped, "Orders ingested");
        Ok(summary)
    }

    /// Opens `path` and runs the producer over it.
    pub async fn run_from_file(self, path: PathBuf) -> Result<ProducerSummary, RecordError> {
        let file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error opening orders file");
                return Ok(ProducerSummary::default());
            }
        };
        self.run(BufReader::new(file)).await
    }
}
