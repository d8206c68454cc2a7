//! 簡單配貨示例

use inventory_allocator::{allocate, Order, Warehouse};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== 簡單配貨示例 ===\n");

    let order = Order::new()
        .with_item("apple", 5)
        .with_item("oranges", 2)
        .with_item("banana", 5)
        .with_source_ref("SO-001".to_string());

    let warehouses = vec![
        Warehouse::new("owd")
            .with_stock("apple", 5)
            .with_stock("oranges", 5)
            .with_stock("banana", 6),
        Warehouse::new("dm")
            .with_stock("apple", 10)
            .with_stock("oranges", 10)
            .with_stock("banana", 10),
    ];

    println!("訂單明細:");
    for (item_id, qty) in order.requested_items() {
        println!("  - 物料: {}, 數量: {}", item_id, qty);
    }

    let plan = allocate(&order, &warehouses);

    println!("\n出貨計劃:");
    println!("{}", serde_json::to_string_pretty(&plan.to_keyed_json())?);

    Ok(())
}
