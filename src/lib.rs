//! # Inventory Allocator
//!
//! 從多個倉庫中以最低成本完整出貨一張訂單。

pub use alloc_calc::{
    allocate, AllocationResult, AllocationWarning, InventoryAllocator, PlanVerifier,
    RemainingDemand, Shortage, WarningSeverity,
};
pub use alloc_core::{
    warehouses_from_json, AllocError, AllocationConfig, ItemQuantities, Order, Result, Shipment,
    ShipmentPlan, Warehouse,
};
