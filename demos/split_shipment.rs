//! 多倉庫拆單示例（JSON 輸入輸出）

use inventory_allocator::{warehouses_from_json, AllocationConfig, InventoryAllocator, Order};

const ORDER: &str = r#"{ "apple": 1000, "banana": 1000, "orange": 1000, "durian": 1000 }"#;

const WAREHOUSES: &str = r#"[
    { "name": "owd", "inventory": { "apple": 500, "banana": 250, "orange": 100, "durian": 10 } },
    { "name": "dma", "inventory": { "apple": 0, "banana": 500, "orange": 800, "durian": 990 } },
    { "name": "wdo", "inventory": {} },
    { "name": "cnq", "inventory": { "apple": 300, "banana": 10, "orange": 100, "durian": 30 } },
    { "name": "bhg", "inventory": { "apple": 10000, "banana": 7000, "orange": 1000, "durian": 500 } }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    println!("=== 多倉庫拆單示例 ===\n");

    let order = Order::from_json(ORDER)?;
    let warehouses = warehouses_from_json(WAREHOUSES)?;

    for max_shipments in [4, 3] {
        let config = AllocationConfig::new().with_max_shipments(max_shipments);
        let allocator = InventoryAllocator::with_config(config)?;
        let result = allocator.allocate(&order, &warehouses);

        println!("出貨倉庫上限 {}:", max_shipments);
        println!("{}", serde_json::to_string_pretty(&result.plan.to_keyed_json())?);
        for warning in &result.warnings {
            println!("  [{:?}] {}: {}", warning.severity, warning.subject, warning.message);
        }
        println!();
    }

    Ok(())
}
