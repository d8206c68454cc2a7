//! 有序的 物料 → 數量 映射
//!
//! 倉庫庫存與出貨明細都需要保留宣告順序，出貨單的欄位順序跟隨庫存的順序。

use std::fmt;

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 物料數量表（鍵唯一，保留插入順序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuantities {
    entries: IndexMap<String, u64>,
}

impl ItemQuantities {
    /// 創建空的數量表
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// 設置物料數量
    ///
    /// 已存在的物料原位覆蓋，新物料追加到末尾。
    pub fn insert(&mut self, item_id: impl Into<String>, quantity: u64) {
        self.entries.insert(item_id.into(), quantity);
    }

    /// 查詢物料數量（不存在時返回 None）
    pub fn get(&self, item_id: &str) -> Option<u64> {
        self.entries.get(item_id).copied()
    }

    /// 查詢物料數量（不存在視為 0）
    pub fn quantity_of(&self, item_id: &str) -> u64 {
        self.get(item_id).unwrap_or(0)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.entries.contains_key(item_id)
    }

    /// 依插入順序遍歷
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 移除數量為 0 的項目（保留其餘順序）
    pub fn retain_positive(&mut self) {
        self.entries.retain(|_, qty| *qty > 0);
    }

    /// 所有物料的數量總和（超過 u64 上限時飽和）
    pub fn total(&self) -> u64 {
        self.entries.values().fold(0u64, |sum, &qty| sum.saturating_add(qty))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for ItemQuantities {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut quantities = ItemQuantities::new();
        for (item_id, quantity) in iter {
            quantities.insert(item_id, quantity);
        }
        quantities
    }
}

impl Serialize for ItemQuantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (item_id, quantity) in &self.entries {
            map.serialize_entry(item_id, quantity)?;
        }
        map.end()
    }
}

struct ItemQuantitiesVisitor;

impl<'de> Visitor<'de> for ItemQuantitiesVisitor {
    type Value = ItemQuantities;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of item name to non-negative quantity")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut quantities = ItemQuantities::new();
        while let Some((item_id, quantity)) = access.next_entry::<String, u64>()? {
            quantities.insert(item_id, quantity);
        }
        Ok(quantities)
    }
}

impl<'de> Deserialize<'de> for ItemQuantities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ItemQuantitiesVisitor)
    }
}
