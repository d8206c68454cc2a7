//! 訂單模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ItemQuantities;

/// 客戶訂單
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單ID
    pub id: Uuid,

    /// 訂購物料與數量（數量為 0 的項目視同未訂購）
    pub items: ItemQuantities,

    /// 來源單據（如銷售訂單號）
    pub source_ref: Option<String>,
}

impl Order {
    /// 創建空訂單
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: ItemQuantities::new(),
            source_ref: None,
        }
    }

    /// 由物料數量表創建訂單
    pub fn from_items(items: ItemQuantities) -> Self {
        Self {
            items,
            ..Self::new()
        }
    }

    /// 解析 `{"apple": 5, ...}` 格式的訂單
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let items: ItemQuantities = serde_json::from_str(json)?;
        Ok(Self::from_items(items))
    }

    /// 建構器模式：加入物料
    pub fn with_item(mut self, item_id: impl Into<String>, quantity: u64) -> Self {
        self.items.insert(item_id, quantity);
        self
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }

    /// 訂購數量（未訂購視為 0）
    pub fn quantity_of(&self, item_id: &str) -> u64 {
        self.items.quantity_of(item_id)
    }

    /// 實際需要出貨的物料（數量大於 0）
    pub fn requested_items(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.items.iter().filter(|(_, qty)| *qty > 0)
    }

    /// 訂購總件數
    pub fn total_units(&self) -> u64 {
        self.items.total()
    }

    /// 檢查是否沒有任何需要出貨的物料
    pub fn is_empty(&self) -> bool {
        self.requested_items().next().is_none()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
