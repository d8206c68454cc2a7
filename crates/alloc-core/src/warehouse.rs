//! 倉庫模型

use serde::{Deserialize, Serialize};

use crate::ItemQuantities;

/// 倉庫（在列表中的位置即成本排序，越前越便宜）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// 倉庫名稱
    pub name: String,

    /// 可用庫存
    pub inventory: ItemQuantities,
}

impl Warehouse {
    /// 創建無庫存的倉庫
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inventory: ItemQuantities::new(),
        }
    }

    /// 建構器模式：設置庫存
    pub fn with_stock(mut self, item_id: impl Into<String>, quantity: u64) -> Self {
        self.inventory.insert(item_id, quantity);
        self
    }

    /// 可用數量（無此物料視為 0）
    pub fn available(&self, item_id: &str) -> u64 {
        self.inventory.quantity_of(item_id)
    }

    /// 檢查是否有該物料的庫存
    pub fn has_stock(&self, item_id: &str) -> bool {
        self.available(item_id) > 0
    }
}

/// 解析 `[{"name": "owd", "inventory": {...}}, ...]` 格式的倉庫列表
pub fn warehouses_from_json(json: &str) -> crate::Result<Vec<Warehouse>> {
    Ok(serde_json::from_str(json)?)
}
