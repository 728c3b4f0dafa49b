//! # Run Lifecycle
//!
//! Everything needed to go from the three files on disk to a finished run.
//!
//! ## The Coordinator
//!
//! [`FulfillmentSystem`] owns the shared state and sequences the two tasks:
//!
//! ```rust,ignore
//! // 1. Load inventory, create an empty queue
//! let system = FulfillmentSystem::new(Config::default()).await?;
//!
//! // 2. Produce (spawn + join), then consume (spawn + join)
//! let report = system.run().await?;
//! ```
//!
//! The producer only ever sees the queue; the consumer sees the queue and the
//! inventory. Both are shared through `Arc`, and each structure carries its
//! own mutex, so there is no global state.
//!
//! ## Configuration
//!
//! [`Config`] names the input and output files and the malformed-line
//! [`ParsePolicy`](crate::model::ParsePolicy).
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see the [`tracing`] module.

pub mod config;
pub mod error;
pub mod fulfillment_system;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use fulfillment_system::*;
pub use self::tracing::*;
