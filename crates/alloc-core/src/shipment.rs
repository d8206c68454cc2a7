//! 出貨模型

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::ItemQuantities;

/// 單一倉庫的出貨
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// 出貨倉庫名稱
    pub warehouse_name: String,

    /// 出貨物料與數量（不含數量為 0 的項目）
    pub items: ItemQuantities,
}

impl Shipment {
    /// 創建空的出貨
    pub fn new(warehouse_name: impl Into<String>) -> Self {
        Self {
            warehouse_name: warehouse_name.into(),
            items: ItemQuantities::new(),
        }
    }

    /// 建構器模式：加入出貨物料
    pub fn with_item(mut self, item_id: impl Into<String>, quantity: u64) -> Self {
        self.items.insert(item_id, quantity);
        self
    }

    pub fn quantity_of(&self, item_id: &str) -> u64 {
        self.items.quantity_of(item_id)
    }

    pub fn total_units(&self) -> u64 {
        self.items.total()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 以 `{"owd": {"apple": 5}}` 格式輸出
    pub fn to_keyed_json(&self) -> Value {
        let items = self
            .items
            .iter()
            .map(|(item_id, qty)| (item_id.to_string(), Value::from(qty)))
            .collect::<Map<String, Value>>();

        let mut keyed = Map::new();
        keyed.insert(self.warehouse_name.clone(), Value::Object(items));
        Value::Object(keyed)
    }
}

/// 出貨計劃（順序與倉庫成本排序一致，空計劃表示無法完整出貨）
///
/// 序列化為出貨陣列；反序列化同樣經過 `push`，數量為 0 的明細與空出貨會被丟棄。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentPlan {
    shipments: Vec<Shipment>,
}

impl ShipmentPlan {
    /// 創建空的出貨計劃
    pub fn empty() -> Self {
        Self {
            shipments: Vec::new(),
        }
    }

    /// 追加出貨（數量為 0 的明細先移除，空出貨不會被加入）
    pub fn push(&mut self, mut shipment: Shipment) {
        shipment.items.retain_positive();
        if !shipment.is_empty() {
            self.shipments.push(shipment);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shipment> {
        self.shipments.iter()
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// 某物料在所有出貨中的總數量
    pub fn total_for(&self, item_id: &str) -> u64 {
        self.shipments
            .iter()
            .fold(0u64, |sum, s| sum.saturating_add(s.quantity_of(item_id)))
    }

    /// 按物料匯總出貨數量
    pub fn totals(&self) -> HashMap<String, u64> {
        let mut totals = HashMap::new();
        for shipment in &self.shipments {
            for (item_id, qty) in shipment.items.iter() {
                let total = totals.entry(item_id.to_string()).or_insert(0u64);
                *total = total.saturating_add(qty);
            }
        }
        totals
    }

    /// 參與出貨的倉庫名稱（按計劃順序）
    pub fn warehouse_names(&self) -> Vec<&str> {
        self.shipments
            .iter()
            .map(|s| s.warehouse_name.as_str())
            .collect()
    }

    /// 以 `[{"owd": {...}}, {"dm": {...}}]` 格式輸出
    pub fn to_keyed_json(&self) -> Value {
        Value::Array(self.shipments.iter().map(Shipment::to_keyed_json).collect())
    }
}

impl FromIterator<Shipment> for ShipmentPlan {
    fn from_iter<I: IntoIterator<Item = Shipment>>(iter: I) -> Self {
        let mut plan = ShipmentPlan::empty();
        for shipment in iter {
            plan.push(shipment);
        }
        plan
    }
}

impl Serialize for ShipmentPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.shipments.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShipmentPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let shipments = Vec::<Shipment>::deserialize(deserializer)?;
        Ok(shipments.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ShipmentPlan {
    type Item = &'a Shipment;
    type IntoIter = std::slice::Iter<'a, Shipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.shipments.iter()
    }
}
