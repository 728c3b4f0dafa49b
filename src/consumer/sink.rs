//! # Result Sinks
//!
//! Where the consumer sends one [`ResultRecord`] per order. The production
//! sink is [`FixedWidthLog`]; tests use the in-memory sinks from
//! [`framework::mock`](crate::framework::mock).
//!
//! ## Log layout
//!
//! ```text
//! CustomerID  ProductID   Description                   Ordered Amount      Result
//! 100         1           Widget                        3       30.00       Filled
//! ```
//!
//! Columns are left aligned with widths 12/12/30/8/12. Wider values push the
//! following columns right; nothing is truncated.
//!
//! Widths count characters, not bytes. A description with multi-byte
//! characters occupies the same 30 columns as an ASCII one, so its row is
//! longer in bytes than an ASCII row.

use crate::consumer::ConsumerError;
use crate::model::ResultRecord;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

#[async_trait]
pub trait ResultSink: Send {
    async fn record(&mut self, record: &ResultRecord) -> Result<(), ConsumerError>;

    /// Called once after the last record.
    async fn finish(&mut self) -> Result<(), ConsumerError> {
        Ok(())
    }
}

pub fn format_header() -> String {
    format!(
        "{:<12}{:<12}{:<30}{:<8}{:<12}{}\n",
        "CustomerID", "ProductID", "Description", "Ordered", "Amount", "Result"
    )
}

pub fn format_row(record: &ResultRecord) -> String {
    format!(
        "{:<12}{:<12}{:<30}{:<8}{:<12.2}{}\n",
        record.customer_id.0,
        record.product_id.0,
        record.description,
        record.quantity_ordered,
        record.amount,
        record.outcome
    )
}

/// Fixed-width text log. The header row is written on construction.
pub struct FixedWidthLog<W: AsyncWrite + Unpin + Send> {
    writer: BufWriter<W>,
}

impl FixedWidthLog<File> {
    /// Creates (or truncates) the log file at `path`.
    pub async fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path).await?;
        Self::new(file).await
    }
}

impl<W: AsyncWrite + Unpin + Send> FixedWidthLog<W> {
    pub async fn new(writer: W) -> std::io::Result<Self> {
        let mut writer = BufWriter::new(writer);
        writer.write_all(format_header().as_bytes()).await?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResultSink for FixedWidthLog<W> {
    async fn record(&mut self, record: &ResultRecord) -> Result<(), ConsumerError> {
        self.writer.write_all(format_row(record).as_bytes()).await?;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), ConsumerError> {
        self.writer.flush().await?;
        Ok(())
    }
}
