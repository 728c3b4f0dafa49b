//! # Observability & Tracing
//!
//! Structured logging for the whole run, built on `tracing`.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `fmt` subscriber without module
//! targets. Verbosity comes from `RUST_LOG` and defaults to `info`, which
//! shows the initial inventory, the orders received, the updated inventory
//! and the run summary.
//!
//! ```bash
//! # Per-order fulfillment decisions
//! RUST_LOG=debug cargo run
//!
//! # Only the consumer's events
//! RUST_LOG=order_fulfillment::consumer=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Phases**: every phase runs inside a `phase{name=...}` span with start/finish events
//! - **Loading**: inventory size, skipped lines with their line numbers
//! - **Fulfillment**: one `debug` event per order with amount and outcome
//! - **Failures**: unreadable files and sink errors at `error` level
//!
//! With `RUST_LOG=debug` the consume phase reads like:
//!
//! ```text
//! INFO phase: Phase started name=consume
//! DEBUG phase: Order processed name=consume customer_id=100 product_id=1 quantity=3 amount=30.0 outcome=Filled
//! DEBUG phase: Order processed name=consume customer_id=101 product_id=1 quantity=3 amount=0.0 outcome=Rejected
//! INFO phase: Orders processed name=consume filled=1 rejected=1 revenue=30.0
//! INFO phase: Phase finished name=consume
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}
