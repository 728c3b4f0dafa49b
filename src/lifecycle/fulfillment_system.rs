use crate::consumer::{Consumer, ConsumerSummary};
use crate::framework::{spawn_phase, Phase};
use crate::inventory::{InventoryError, InventoryStore};
use crate::lifecycle::{Config, SystemError};
use crate::model::InventoryItem;
use crate::order_queue::OrderQueue;
use crate::producer::{Producer, ProducerSummary};
use std::sync::Arc;
use tracing::{error, info};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub orders_received: usize,
    /// Malformed lines skipped across the inventory and orders files.
    pub lines_skipped: usize,
    pub filled: usize,
    pub rejected: usize,
    pub revenue: f64,
    pub final_inventory: Vec<InventoryItem>,
}

/// The coordinator of a fulfillment run.
///
/// `FulfillmentSystem` is responsible for:
/// - **Shared State**: owning the [`InventoryStore`] and the [`OrderQueue`]
/// - **Sequencing**: running the producer to completion, then the consumer
/// - **Reporting**: logging the inventory before and after, and returning a [`RunReport`]
///
/// # Example
///
/// ```ignore
/// let system = FulfillmentSystem::new(Config::default()).await?;
/// let report = system.run().await?;
/// println!("{} filled, {} rejected", report.filled, report.rejected);
/// ```
pub struct FulfillmentSystem {
    config: Config,
    inventory: Arc<InventoryStore>,
    queue: Arc<OrderQueue>,
}

impl FulfillmentSystem {
    /// Loads the inventory named by `config` and sets up an empty order queue.
    ///
    /// An inventory file that cannot be opened is logged and leaves the store
    /// empty, so every order will be rejected.
    ///
    /// # Errors
    /// Read failures, or a malformed line under [`ParsePolicy::Abort`](crate::model::ParsePolicy::Abort).
    pub async fn new(config: Config) -> Result<Self, SystemError> {
        let inventory =
            match InventoryStore::load_file(&config.inventory_path, config.parse_policy).await {
                Ok(store) => store,
                Err(InventoryError::SourceUnreadable { path, source }) => {
                    error!(path = %path.display(), error = %source, "Error opening inventory file");
                    InventoryStore::default()
                }
                Err(e) => return Err(e.into()),
            };
        Ok(Self::with_inventory(config, inventory))
    }

    /// Uses an already built store instead of reading `config.inventory_path`.
    pub fn with_inventory(config: Config, inventory: InventoryStore) -> Self {
        Self {
            config,
            inventory: Arc::new(inventory),
            queue: Arc::new(OrderQueue::new()),
        }
    }

    pub fn inventory(&self) -> &Arc<InventoryStore> {
        &self.inventory
    }

    pub fn queue(&self) -> &Arc<OrderQueue> {
        &self.queue
    }

    /// Runs both phases and returns the report.
    ///
    /// The producer is joined before the consumer is spawned; the phases
    /// never overlap.
    pub async fn run(self) -> Result<RunReport, SystemError> {
        info!("Initial inventory:");
        log_inventory(&self.inventory.snapshot().await);

        // =====================================================================
        // Phase 1: ingest orders
        // =====================================================================

        let producer = Producer::new(Arc::clone(&self.queue), self.config.parse_policy);
        let produced: ProducerSummary =
            spawn_phase(Phase::Produce, producer.run_from_file(self.config.orders_path.clone()))
                .join()
                .await??;

        info!(count = produced.appended, "Orders received:");
        for order in self.queue.snapshot().await {
            info!(
                customer_id = %order.customer_id,
                product_id = %order.product_id,
                quantity = order.quantity_ordered,
                "Order"
            );
        }

        // =====================================================================
        // Phase 2: fulfill orders
        // =====================================================================

        let consumer = Consumer::new(Arc::clone(&self.queue), Arc::clone(&self.inventory));
        let consumed: ConsumerSummary =
            spawn_phase(Phase::Consume, consumer.run_to_file(self.config.log_path.clone()))
                .join()
                .await??;

        let final_inventory = self.inventory.snapshot().await;
        info!("Updated inventory:");
        log_inventory(&final_inventory);

        let report = RunReport {
            orders_received: produced.appended,
            lines_skipped: self.inventory.skipped_lines() + produced.skipped,
            filled: consumed.filled,
            rejected: consumed.rejected,
            revenue: consumed.revenue,
            final_inventory,
        };
        info!(
            received = report.orders_received,
            filled = report.filled,
            rejected = report.rejected,
            revenue = report.revenue,
            "Run complete"
        );
        Ok(report)
    }
}

fn log_inventory(items: &[InventoryItem]) {
    for item in items {
        info!(
            product_id = %item.product_id,
            price = item.price,
            quantity = item.quantity,
            description = %item.description,
            "Item"
        );
    }
}
