//! 出貨計劃驗證

use std::collections::HashSet;

use alloc_core::{AllocError, Order, Result, Shipment, ShipmentPlan, Warehouse};

/// 出貨計劃驗證器
///
/// 檢查計劃是否滿足配貨的各項不變量：
/// - 出貨總數與訂購數量完全一致（或計劃為空）
/// - 不超出倉庫可用庫存
/// - 沒有數量為 0 的明細或空出貨
/// - 出貨順序跟隨倉庫順序，且便宜倉庫的庫存優先用盡
pub struct PlanVerifier;

impl PlanVerifier {
    /// 驗證出貨計劃（所有倉庫都參與配貨）
    pub fn verify(order: &Order, warehouses: &[Warehouse], plan: &ShipmentPlan) -> Result<()> {
        Self::verify_excluding(order, warehouses, plan, &HashSet::new())
    }

    /// 驗證出貨計劃，`excluded` 中的倉庫不參與成本優先檢查
    pub fn verify_excluding(
        order: &Order,
        warehouses: &[Warehouse],
        plan: &ShipmentPlan,
        excluded: &HashSet<String>,
    ) -> Result<()> {
        if plan.is_empty() {
            return Ok(());
        }

        let matched = Self::match_warehouses(warehouses, plan)?;

        for (shipment, &index) in plan.iter().zip(&matched) {
            let warehouse = &warehouses[index];
            if excluded.contains(&warehouse.name) {
                return Err(AllocError::Verification(format!(
                    "倉庫 {} 已暫停出貨卻出現在計劃中",
                    warehouse.name
                )));
            }
            Self::check_shipment_lines(order, warehouse, shipment)?;
        }

        for (item_id, requested) in order.requested_items() {
            let shipped = plan.total_for(item_id);
            if shipped != requested {
                return Err(AllocError::Verification(format!(
                    "物料 {} 出貨 {}，訂購 {}",
                    item_id, shipped, requested
                )));
            }
        }

        // 逐一倉庫重演：每個倉庫必須出貨 min(可用, 尚需)
        for (item_id, requested) in order.requested_items() {
            let mut needed = requested;
            for (index, warehouse) in warehouses.iter().enumerate() {
                if excluded.contains(&warehouse.name) {
                    continue;
                }
                let shipped = matched
                    .iter()
                    .position(|&m| m == index)
                    .map(|pos| plan.shipments()[pos].quantity_of(item_id))
                    .unwrap_or(0);
                let expected = warehouse.available(item_id).min(needed);
                if shipped != expected {
                    return Err(AllocError::Verification(format!(
                        "物料 {} 未按成本優先：倉庫 {} 應出 {}，實出 {}",
                        item_id, warehouse.name, expected, shipped
                    )));
                }
                needed -= shipped;
            }
        }

        Ok(())
    }

    /// 將每筆出貨對應到倉庫列表中的位置（必須嚴格遞增）
    ///
    /// 同名倉庫取第一個庫存足以涵蓋該出貨所有明細的位置；按成本優先配貨時，
    /// 更前面的同名倉庫若能涵蓋，必定已先出貨。
    fn match_warehouses(warehouses: &[Warehouse], plan: &ShipmentPlan) -> Result<Vec<usize>> {
        let mut matched = Vec::with_capacity(plan.len());
        let mut next = 0;

        for shipment in plan {
            let offset = warehouses[next..]
                .iter()
                .position(|w| {
                    w.name == shipment.warehouse_name
                        && shipment
                            .items
                            .iter()
                            .all(|(item_id, qty)| qty <= w.available(item_id))
                })
                .ok_or_else(|| {
                    AllocError::Verification(format!(
                        "出貨倉庫 {} 不存在、順序錯誤或庫存不足",
                        shipment.warehouse_name
                    ))
                })?;
            matched.push(next + offset);
            next += offset + 1;
        }

        Ok(matched)
    }

    fn check_shipment_lines(order: &Order, warehouse: &Warehouse, shipment: &Shipment) -> Result<()> {
        if shipment.is_empty() {
            return Err(AllocError::Verification(format!(
                "倉庫 {} 的出貨為空",
                warehouse.name
            )));
        }

        for (item_id, qty) in shipment.items.iter() {
            if qty == 0 {
                return Err(AllocError::Verification(format!(
                    "倉庫 {} 的物料 {} 出貨數量為 0",
                    warehouse.name, item_id
                )));
            }
            if qty > warehouse.available(item_id) {
                return Err(AllocError::Verification(format!(
                    "倉庫 {} 的物料 {} 超量出貨：出貨 {}, 可用 {}",
                    warehouse.name,
                    item_id,
                    qty,
                    warehouse.available(item_id)
                )));
            }
            if order.quantity_of(item_id) == 0 {
                return Err(AllocError::Verification(format!(
                    "物料 {} 未被訂購",
                    item_id
                )));
            }
        }

        Ok(())
    }
}
