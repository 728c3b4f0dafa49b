use order_fulfillment::lifecycle::{Config, FulfillmentSystem, SystemError};
use order_fulfillment::model::{InventoryItem, ParsePolicy, ProductId};
use std::fs;
use std::path::Path;

const HEADER: &str = "CustomerID  ProductID   Description                   Ordered Amount      Result";

fn write_inputs(dir: &Path, inventory: &str, orders: &str) -> Config {
    let config = Config::in_dir(dir);
    fs::write(&config.inventory_path, inventory).unwrap();
    fs::write(&config.orders_path, orders).unwrap();
    config
}

fn read_log(config: &Config) -> Vec<String> {
    fs::read_to_string(&config.log_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Full run over real files: second order for the same product runs short.
#[tokio::test]
async fn test_full_run_fills_then_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), "1 10.00 5 Widget\n", "100 1 3\n101 1 3\n");

    // Load the inventory and run both phases
    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    let report = system.run().await.unwrap();

    // Verify the counters and the remaining stock
    assert_eq!(report.orders_received, 2);
    assert_eq!(report.filled, 1);
    assert_eq!(report.rejected, 1);
    assert_eq!(report.revenue, 30.0);
    assert_eq!(report.final_inventory, vec![InventoryItem::new(1, 10.0, 2, "Widget")]);

    // Verify the log rows in queue order
    let log = read_log(&config);
    assert_eq!(
        log,
        vec![
            HEADER.to_string(),
            "100         1           Widget                        3       30.00       Filled".to_string(),
            "101         1           Widget                        3       0.00        Rejected".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_empty_orders_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), "1 10.00 5 Widget\n", "");

    let report = FulfillmentSystem::new(config.clone()).await.unwrap().run().await.unwrap();

    assert_eq!(report.orders_received, 0);
    assert_eq!(read_log(&config), vec![HEADER.to_string()]);
    assert_eq!(report.final_inventory[0].quantity, 5);
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), "1 10.00 5 Widget\n", "100 999 1\n");

    let report = FulfillmentSystem::new(config.clone()).await.unwrap().run().await.unwrap();

    assert_eq!(report.rejected, 1);
    assert_eq!(
        read_log(&config)[1],
        "100         999                                       1       0.00        Rejected"
    );
}

/// Without an inventory file the store stays empty and every order rejects.
#[tokio::test]
async fn test_missing_inventory_rejects_everything() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    fs::write(&config.orders_path, "1 1 1\n2 2 2\n").unwrap();

    // Create the system with no inventory file present
    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    assert!(system.inventory().is_empty().await);
    let report = system.run().await.unwrap();

    assert_eq!(report.orders_received, 2);
    assert_eq!(report.rejected, 2);
    assert!(read_log(&config).iter().skip(1).all(|line| line.ends_with("Rejected")));
}

/// Without an orders file the producer appends nothing; the log has only its header.
#[tokio::test]
async fn test_missing_orders_file_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    fs::write(&config.inventory_path, "1 10.00 5 Widget\n").unwrap();

    let report = FulfillmentSystem::new(config.clone()).await.unwrap().run().await.unwrap();

    assert_eq!(report.orders_received, 0);
    assert_eq!(read_log(&config), vec![HEADER.to_string()]);
}

#[tokio::test]
async fn test_skip_policy_counts_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "1 10.00 5 Widget\nbroken line\n2 2.50 4 Gadget\n",
        "100 1 1\n100 2\n101 2 4\n",
    );

    let report = FulfillmentSystem::new(config).await.unwrap().run().await.unwrap();

    assert_eq!(report.lines_skipped, 2);
    assert_eq!(report.orders_received, 2);
    assert_eq!(report.filled, 2);
    assert_eq!(report.revenue, 20.0);
}

#[tokio::test]
async fn test_abort_policy_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), "1 10.00 5 Widget\n", "100 1 1\nnot an order\n")
        .with_parse_policy(ParsePolicy::Abort);

    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    let queue = std::sync::Arc::clone(system.queue());

    // Run until the producer hits the bad line
    let err = system.run().await.unwrap_err();

    assert!(matches!(err, SystemError::Orders(_)));
    // The consumer never started.
    assert_eq!(queue.len().await, 1);
    assert!(!config.log_path.exists());
}

#[tokio::test]
async fn test_abort_policy_rejects_bad_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), "1 ten 5 Widget\n", "100 1 1\n")
        .with_parse_policy(ParsePolicy::Abort);

    let result = FulfillmentSystem::new(config).await;
    assert!(matches!(result, Err(SystemError::Inventory(_))));
}

/// Filled quantities per product add up to the stock that disappeared.
#[tokio::test]
async fn test_stock_consumed_matches_filled_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(
        dir.path(),
        "1 1.00 10 Alpha\n2 3.00 4 Beta\n",
        "1 1 4\n2 2 3\n3 1 4\n4 2 3\n5 1 4\n6 2 1\n7 1 2\n",
    );

    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    let inventory = std::sync::Arc::clone(system.inventory());
    system.run().await.unwrap();

    // Sum the filled quantities per product from the log
    let mut filled = [0u32; 3];
    for line in read_log(&config).iter().skip(1).filter(|l| l.ends_with("Filled")) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let product: usize = fields[1].parse().unwrap();
        filled[product] += fields[3].parse::<u32>().unwrap();
    }

    // Verify they match the stock that left the store
    assert_eq!(filled[1], 10 - inventory.quantity_of(ProductId(1)).await.unwrap());
    assert_eq!(filled[2], 4 - inventory.quantity_of(ProductId(2)).await.unwrap());
}

/// A log that cannot be created stops the consumer before any order is filled.
#[tokio::test]
async fn test_unwritable_log_leaves_inventory_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(dir.path(), "1 10.00 5 Widget\n2 2.50 4 Gadget\n", "100 1 3\n101 2 1\n");
    config.log_path = dir.path().join("missing").join("log");

    // Capture the stock as loaded
    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    let initial = system.inventory().snapshot().await;

    // The run itself still succeeds
    let report = system.run().await.unwrap();

    // Verify nothing was processed and no log appeared
    assert_eq!(report.orders_received, 2);
    assert_eq!(report.filled, 0);
    assert_eq!(report.rejected, 0);
    assert_eq!(report.final_inventory, initial);
    assert!(!config.log_path.exists());
}

/// Bytes that are not UTF-8 only cost the line they sit on.
#[tokio::test]
async fn test_invalid_utf8_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    fs::write(&config.inventory_path, b"1 10.00 5 Widget\n2 1.00 3 Caf\xe9 latte\n".as_slice()).unwrap();
    fs::write(&config.orders_path, b"100 1 2\n\xff\xfe junk\n101 2 1\n".as_slice()).unwrap();

    // Both files load despite the bad bytes
    let system = FulfillmentSystem::new(config.clone()).await.unwrap();
    let report = system.run().await.unwrap();

    // Verify one line per file was dropped and the rest processed
    assert_eq!(report.lines_skipped, 2);
    assert_eq!(report.orders_received, 2);
    assert_eq!(report.filled, 1);
    assert_eq!(report.rejected, 1);
    assert_eq!(read_log(&config).len(), 3);
}
