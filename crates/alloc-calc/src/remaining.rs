//! 剩餘需求追蹤

use std::collections::HashMap;

use alloc_core::Order;

use crate::Shortage;

/// 單次配貨的剩餘需求（訂單的工作副本，不會修改呼叫方的訂單）
#[derive(Debug, Clone)]
pub struct RemainingDemand {
    /// 物料 → 尚需數量
    remaining: HashMap<String, u64>,

    /// 訂購明細（保留訂單順序）
    requested: Vec<(String, u64)>,
}

impl RemainingDemand {
    /// 由訂單建立工作副本（數量為 0 的項目不列入）
    pub fn from_order(order: &Order) -> Self {
        let requested: Vec<(String, u64)> = order
            .requested_items()
            .map(|(item_id, qty)| (item_id.to_string(), qty))
            .collect();
        let remaining = requested.iter().cloned().collect();

        Self {
            remaining,
            requested,
        }
    }

    /// 從某倉庫的可用數量中扣取，返回實際扣取的數量
    pub fn take(&mut self, item_id: &str, available: u64) -> u64 {
        match self.remaining.get_mut(item_id) {
            Some(needed) => {
                let supplied = available.min(*needed);
                *needed -= supplied;
                supplied
            }
            None => 0,
        }
    }

    /// 查詢尚需數量（未訂購視為 0）
    pub fn remaining_for(&self, item_id: &str) -> u64 {
        self.remaining.get(item_id).copied().unwrap_or(0)
    }

    /// 檢查所有物料是否都已滿足
    pub fn is_satisfied(&self) -> bool {
        self.remaining.values().all(|&qty| qty == 0)
    }

    /// 未滿足的物料（按訂單順序）
    pub fn outstanding(&self) -> Vec<Shortage> {
        self.requested
            .iter()
            .filter_map(|(item_id, requested)| {
                let left = self.remaining_for(item_id);
                (left > 0).then(|| Shortage {
                    item_id: item_id.clone(),
                    requested: *requested,
                    allocated: requested - left,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_caps_at_remaining() {
        let order = Order::new().with_item("apple", 12);
        let mut remaining = RemainingDemand::from_order(&order);

        assert_eq!(remaining.take("apple", 5), 5);
        assert_eq!(remaining.remaining_for("apple"), 7);
        assert_eq!(remaining.take("apple", 10), 7);
        assert_eq!(remaining.take("apple", 12), 0);
        assert!(remaining.is_satisfied());
    }

    #[test]
    fn test_take_unrequested_item() {
        let order = Order::new().with_item("apple", 1).with_item("grape", 0);
        let mut remaining = RemainingDemand::from_order(&order);

        assert_eq!(remaining.take("banana", 19), 0);
        assert_eq!(remaining.take("grape", 4), 0);
        assert_eq!(remaining.remaining_for("banana"), 0);
    }

    #[test]
    fn test_caller_order_untouched() {
        let order = Order::new().with_item("apple", 3);
        let mut remaining = RemainingDemand::from_order(&order);
        remaining.take("apple", 3);

        assert_eq!(order.quantity_of("apple"), 3);
    }

    #[test]
    fn test_outstanding_reports_shortage() {
        let order = Order::new()
            .with_item("apple", 10)
            .with_item("grapefruit", 21);
        let mut remaining = RemainingDemand::from_order(&order);
        remaining.take("apple", 10);
        remaining.take("grapefruit", 19);
        remaining.take("grapefruit", 1);

        assert!(!remaining.is_satisfied());
        let shortages = remaining.outstanding();
        assert_eq!(shortages.len(), 1);
        assert_eq!(shortages[0].item_id, "grapefruit");
        assert_eq!(shortages[0].allocated, 20);
        assert_eq!(shortages[0].missing(), 1);
    }

    #[test]
    fn test_empty_order_is_satisfied() {
        let remaining = RemainingDemand::from_order(&Order::new());
        assert!(remaining.is_satisfied());
        assert!(remaining.outstanding().is_empty());
    }
}
