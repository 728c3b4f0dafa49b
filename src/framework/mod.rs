//! Task and I/O plumbing shared by the producer, the consumer and the coordinator.
//!
//! # Main Components
//!
//! - [`spawn_phase`] / [`PhaseHandle`] - run one phase in its own task and join it
//! - [`RecordReader`] - line-numbered record source with a malformed-line policy
//! - [`FrameworkError`] - task supervision failures
//!
//! # Testing
//!
//! See [`mock`] for in-memory result sinks.

pub mod core;
pub mod mock;
pub mod records;

pub use self::core::*;
pub use records::{RecordError, RecordReader};
