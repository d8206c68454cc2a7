//! # Allocation Engine
//!
//! 成本優先的訂單配貨引擎

pub mod allocator;
pub mod remaining;
pub mod verify;

// Re-export 主要類型
pub use allocator::{allocate, InventoryAllocator};
pub use remaining::RemainingDemand;
pub use verify::PlanVerifier;

use alloc_core::ShipmentPlan;
use serde::Serialize;

/// 配貨結果
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// 出貨計劃（無法完整出貨時為空）
    pub plan: ShipmentPlan,

    /// 缺貨明細
    pub shortages: Vec<Shortage>,

    /// 警告信息
    pub warnings: Vec<AllocationWarning>,

    /// 計算耗時（微秒）
    pub calculation_time_us: Option<u128>,
}

impl AllocationResult {
    /// 創建空的配貨結果
    pub fn empty() -> Self {
        Self {
            plan: ShipmentPlan::empty(),
            shortages: Vec::new(),
            warnings: Vec::new(),
            calculation_time_us: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: AllocationWarning) {
        self.warnings.push(warning);
    }

    /// 檢查是否產生了出貨計劃
    pub fn is_fulfilled(&self) -> bool {
        !self.plan.is_empty()
    }
}

/// 缺貨記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortage {
    /// 物料ID
    pub item_id: String,

    /// 訂購數量
    pub requested: u64,

    /// 所有倉庫合計可配數量
    pub allocated: u64,
}

impl Shortage {
    /// 缺少的數量
    pub fn missing(&self) -> u64 {
        self.requested - self.allocated
    }
}

/// 配貨警告
#[derive(Debug, Clone)]
pub struct AllocationWarning {
    /// 相關的物料或倉庫
    pub subject: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl AllocationWarning {
    pub fn new(subject: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            subject,
            message,
            severity,
        }
    }

    pub fn info(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Info)
    }

    pub fn warning(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Warning)
    }

    pub fn error(subject: String, message: String) -> Self {
        Self::new(subject, message, WarningSeverity::Error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
    Error,
}
