//! # Order Fulfillment
//!
//! > **Batch order fulfillment against a shared product inventory.**
//!
//! A run loads a product inventory, ingests a file of customer orders with a
//! producer task, then fulfills them with a consumer task that decrements
//! stock and writes one fixed-width result row per order.
//!
//! ## Design
//!
//! ### Owned shared state
//! The [`InventoryStore`](inventory::InventoryStore) and the
//! [`OrderQueue`](order_queue::OrderQueue) each pair their data with the mutex
//! that guards it. The coordinator owns both and hands `Arc` clones to the
//! tasks that need them. Nothing lives in globals.
//!
//! ### Lock discipline
//! No task ever holds both locks, no lock is held across log I/O, and the
//! inventory check-and-decrement happens under one acquisition. Any number
//! of consumers could share the store without overselling.
//!
//! ### Sequential phases
//! The producer is spawned and joined before the consumer is spawned. The
//! queue still offers a weakly consistent cursor that tolerates concurrent
//! appends.
//!
//! ### Type-Safe Error Handling
//! Each component has its own `thiserror` enum; [`SystemError`](lifecycle::SystemError)
//! gathers them for the binary. Malformed input lines follow an explicit
//! [`ParsePolicy`](model::ParsePolicy) instead of producing garbage records.
//!
//! ## Module Tour
//!
//! - [`model`] - inventory items, orders, result records and line parsers
//! - [`inventory`] - the shared product store and its fulfillment operation
//! - [`order_queue`] - the shared, append-only order queue
//! - [`producer`] / [`consumer`] - the two tasks
//! - [`framework`] - phase tasks, record readers and mock sinks
//! - [`lifecycle`] - the coordinator, configuration and tracing setup
//!
//! ## Running
//!
//! ```bash
//! # Reads ./inventory.old and ./orders, writes ./log
//! RUST_LOG=info cargo run
//! ```

pub mod consumer;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod order_queue;
pub mod producer;
