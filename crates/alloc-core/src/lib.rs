//! # Allocation Core
//!
//! 訂單配貨的核心資料模型與類型定義

pub mod config;
pub mod order;
pub mod quantities;
pub mod shipment;
pub mod warehouse;

// Re-export 主要類型
pub use config::AllocationConfig;
pub use order::Order;
pub use quantities::ItemQuantities;
pub use shipment::{Shipment, ShipmentPlan};
pub use warehouse::{warehouses_from_json, Warehouse};

/// 配貨錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum AllocError {
    #[error("無效的配貨配置: {0}")]
    InvalidConfig(String),

    #[error("無效的輸入資料: {0}")]
    InvalidInput(String),

    #[error("出貨計劃驗證失敗: {0}")]
    Verification(String),
}

impl From<serde_json::Error> for AllocError {
    fn from(err: serde_json::Error) -> Self {
        AllocError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AllocError>;
