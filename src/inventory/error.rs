//! Error types for the inventory store.

use crate::framework::RecordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be opened.
    #[error("cannot open inventory file {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped on an I/O failure or a malformed line.
    #[error(transparent)]
    Record(#[from] RecordError),
}
