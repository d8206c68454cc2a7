//! 配貨主計算器

use alloc_core::{AllocationConfig, Order, Shipment, ShipmentPlan, Warehouse};

use crate::{AllocationResult, AllocationWarning, RemainingDemand};

/// 以預設配置配貨，只返回出貨計劃
///
/// 倉庫按列表順序由便宜到貴依序扣取庫存；任何物料無法完整滿足時返回空計劃。
pub fn allocate(order: &Order, warehouses: &[Warehouse]) -> ShipmentPlan {
    InventoryAllocator::new().cheapest_shipment(order, warehouses)
}

/// 配貨計算器
#[derive(Debug, Clone, Default)]
pub struct InventoryAllocator {
    config: AllocationConfig,
}

impl InventoryAllocator {
    /// 創建使用預設配置的計算器
    pub fn new() -> Self {
        Self::default()
    }

    /// 創建使用指定配置的計算器
    pub fn with_config(config: AllocationConfig) -> alloc_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 獲取配置引用
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// 計算最便宜的出貨計劃
    pub fn cheapest_shipment(&self, order: &Order, warehouses: &[Warehouse]) -> ShipmentPlan {
        self.allocate(order, warehouses).plan
    }

    /// 主配貨入口
    pub fn allocate(&self, order: &Order, warehouses: &[Warehouse]) -> AllocationResult {
        tracing::info!(
            "開始配貨：訂單 {}，訂購物料 {} 項，倉庫 {} 個",
            order.id,
            order.items.len(),
            warehouses.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = AllocationResult::empty();
        let mut remaining = RemainingDemand::from_order(order);
        let mut plan = ShipmentPlan::empty();

        for warehouse in warehouses {
            if remaining.is_satisfied() {
                tracing::debug!("需求已全部滿足，略過倉庫 {} 及之後的倉庫", warehouse.name);
                break;
            }

            if self.config.is_excluded(&warehouse.name) {
                tracing::debug!("倉庫 {} 已暫停出貨，跳過", warehouse.name);
                result.add_warning(AllocationWarning::info(
                    warehouse.name.clone(),
                    "倉庫已暫停出貨，未參與配貨".to_string(),
                ));
                continue;
            }

            let shipment = Self::draw_from(warehouse, &mut remaining);
            tracing::debug!(
                "倉庫 {} 出貨物料 {} 項，共 {} 件",
                warehouse.name,
                shipment.items.len(),
                shipment.total_units()
            );
            plan.push(shipment);
        }

        let shortages = remaining.outstanding();

        if !shortages.is_empty() {
            for shortage in &shortages {
                tracing::warn!(
                    "物料 {} 庫存不足：訂購 {}, 可配 {}",
                    shortage.item_id,
                    shortage.requested,
                    shortage.allocated
                );
                result.add_warning(AllocationWarning::error(
                    shortage.item_id.clone(),
                    format!("庫存不足：缺少 {}", shortage.missing()),
                ));
            }
            plan = ShipmentPlan::empty();
        } else if !self.config.allows_shipments(plan.len()) {
            tracing::warn!(
                "出貨需要 {} 個倉庫，超過上限 {:?}",
                plan.len(),
                self.config.max_shipments
            );
            result.add_warning(AllocationWarning::error(
                order.id.to_string(),
                format!("出貨需要 {} 個倉庫，超過上限", plan.len()),
            ));
            plan = ShipmentPlan::empty();
        }

        result.shortages = shortages;
        result.plan = plan;
        result.calculation_time_us = Some(start_time.elapsed().as_micros());

        tracing::info!("配貨完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("出貨倉庫數量: {}", result.plan.len());

        result
    }

    /// 從單一倉庫扣取庫存（按庫存宣告順序），建立該倉庫的出貨
    fn draw_from(warehouse: &Warehouse, remaining: &mut RemainingDemand) -> Shipment {
        let mut shipment = Shipment::new(warehouse.name.clone());

        for (item_id, available) in warehouse.inventory.iter() {
            let supplied = remaining.take(item_id, available);
            if supplied > 0 {
                tracing::debug!("{} → {} (數量: {})", warehouse.name, item_id, supplied);
                shipment.items.insert(item_id, supplied);
            }
        }

        shipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarningSeverity;
    use rstest::rstest;

    fn owd_dm() -> Vec<Warehouse> {
        vec![
            Warehouse::new("owd")
                .with_stock("oranges", 5)
                .with_stock("banana", 19)
                .with_stock("apple", 5),
            Warehouse::new("dm").with_stock("apple", 5).with_stock("oranges", 5),
        ]
    }

    #[test]
    fn test_shipment_follows_inventory_order() {
        let order = Order::new().with_item("apple", 10).with_item("oranges", 10);
        let plan = allocate(&order, &owd_dm());

        let first: Vec<_> = plan.shipments()[0].items.iter().collect();
        assert_eq!(first, vec![("oranges", 5), ("apple", 5)]);
        let second: Vec<_> = plan.shipments()[1].items.iter().collect();
        assert_eq!(second, vec![("apple", 5), ("oranges", 5)]);
    }

    #[rstest]
    #[case::single_warehouse(5, vec!["owd"])]
    #[case::needs_second_warehouse(8, vec!["owd", "dm"])]
    #[case::exactly_all_stock(10, vec!["owd", "dm"])]
    #[case::more_than_stock(11, vec![])]
    fn test_apple_split(#[case] quantity: u64, #[case] expected: Vec<&str>) {
        let order = Order::new().with_item("apple", quantity);
        let plan = allocate(&order, &owd_dm());

        assert_eq!(plan.warehouse_names(), expected);
    }

    #[test]
    fn test_shortage_suppresses_plan() {
        let order = Order::new().with_item("apple", 11);
        let result = InventoryAllocator::new().allocate(&order, &owd_dm());

        assert!(!result.is_fulfilled());
        assert_eq!(result.shortages.len(), 1);
        assert_eq!(result.shortages[0].missing(), 1);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.severity == WarningSeverity::Error && w.subject == "apple"));
        assert!(result.calculation_time_us.is_some());
    }

    #[test]
    fn test_excluded_warehouse_is_skipped() {
        let config = AllocationConfig::new().with_excluded_warehouse("owd");
        let allocator = InventoryAllocator::with_config(config).unwrap();
        let order = Order::new().with_item("apple", 5);

        let result = allocator.allocate(&order, &owd_dm());

        assert_eq!(result.plan.warehouse_names(), vec!["dm"]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].severity, WarningSeverity::Info);
    }

    #[test]
    fn test_excluding_needed_warehouse_causes_shortage() {
        let config = AllocationConfig::new().with_excluded_warehouse("dm");
        let allocator = InventoryAllocator::with_config(config).unwrap();
        let order = Order::new().with_item("apple", 10);

        assert!(allocator.cheapest_shipment(&order, &owd_dm()).is_empty());
    }

    #[test]
    fn test_shipment_cap() {
        let order = Order::new().with_item("apple", 10);

        let capped = InventoryAllocator::with_config(AllocationConfig::new().with_max_shipments(1))
            .unwrap();
        let result = capped.allocate(&order, &owd_dm());
        assert!(result.plan.is_empty());
        assert!(result.shortages.is_empty());
        assert_eq!(result.warnings.len(), 1);

        let loose = InventoryAllocator::with_config(AllocationConfig::new().with_max_shipments(2))
            .unwrap();
        assert_eq!(loose.cheapest_shipment(&order, &owd_dm()).len(), 2);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AllocationConfig::new().with_max_shipments(0);
        assert!(InventoryAllocator::with_config(config).is_err());
    }

    #[test]
    fn test_shortage_warnings_match_shortages() {
        let order = Order::new()
            .with_item("apple", 20)
            .with_item("oranges", 20)
            .with_item("banana", 1);
        let result = InventoryAllocator::new().allocate(&order, &owd_dm());

        let subjects: Vec<_> = result.warnings.iter().map(|w| w.subject.as_str()).collect();
        assert_eq!(subjects, vec!["apple", "oranges"]);
        assert_eq!(result.shortages.len(), 2);
        assert_eq!(result.shortages[1].missing(), 10);
    }

    #[test]
    fn test_huge_quantities_do_not_overflow() {
        let order = Order::new().with_item("apple", u64::MAX).with_item("pear", 1);
        let warehouses = vec![Warehouse::new("owd")
            .with_stock("apple", u64::MAX)
            .with_stock("pear", u64::MAX)];

        let plan = allocate(&order, &warehouses);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.shipments()[0].total_units(), u64::MAX);
    }

    #[test]
    fn test_inventory_untouched() {
        let warehouses = owd_dm();
        let before = warehouses.clone();
        let order = Order::new().with_item("apple", 10).with_item("oranges", 10);

        allocate(&order, &warehouses);

        assert_eq!(warehouses, before);
        assert_eq!(order.quantity_of("apple"), 10);
    }
}
