//! Error types for the consumer task.

use thiserror::Error;

/// Errors that stop the consumer before the queue is exhausted.
#[derive(Debug, Error)]
pub enum ConsumerError {
    /// Writing a result row failed.
    #[error("failed to write result log: {0}")]
    Write(#[from] std::io::Error),
}
