//! 配貨配置模型

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{AllocError, Result};

/// 配貨參數配置
///
/// 預設值不做任何限制，行為與最基本的成本優先配貨一致。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// 最多允許幾個倉庫出貨（None 表示不限）
    ///
    /// 完整出貨需要的倉庫數超過上限時，整張訂單視為無法出貨。
    pub max_shipments: Option<usize>,

    /// 暫停出貨的倉庫（配貨時跳過）
    pub excluded_warehouses: HashSet<String>,
}

impl AllocationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置出貨倉庫數上限
    pub fn with_max_shipments(mut self, max_shipments: usize) -> Self {
        self.max_shipments = Some(max_shipments);
        self
    }

    /// 建構器模式：排除倉庫
    pub fn with_excluded_warehouse(mut self, name: impl Into<String>) -> Self {
        self.excluded_warehouses.insert(name.into());
        self
    }

    /// 檢查倉庫是否參與配貨
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_warehouses.contains(name)
    }

    /// 檢查出貨數是否在上限內
    pub fn allows_shipments(&self, count: usize) -> bool {
        self.max_shipments.map_or(true, |max| count <= max)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.max_shipments == Some(0) {
            return Err(AllocError::InvalidConfig(
                "出貨倉庫數上限必須大於 0".to_string(),
            ));
        }
        Ok(())
    }
}
