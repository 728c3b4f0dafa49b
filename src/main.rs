use order_fulfillment::lifecycle::{setup_tracing, Config, FulfillmentSystem, SystemError};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    info!("Starting order fulfillment");

    let system = FulfillmentSystem::new(Config::default()).await?;
    let report = system.run().await?;

    info!(
        filled = report.filled,
        rejected = report.rejected,
        skipped = report.lines_skipped,
        "Application completed successfully"
    );
    Ok(())
}
