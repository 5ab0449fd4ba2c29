//! Buy, sell, and defect-marking operations per product family.
//!
//! One generic path serves all three families through [`StockItem`]; the
//! public functions pick the family map and the rest is identical: validate,
//! mutate the item, record exactly one ledger entry, all inside one unit of
//! work.

use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;
use serde_json::Value;

use tabung_core::category::CategoryRegistry;
use tabung_core::chart::ChartRegistry;
use tabung_core::inventory::{
    CylinderType, DefectAction, RegulatorType, StockItem, StoveType, validate_price,
    validate_quantity,
};
use tabung_core::ledger::{
    Counterparty, LedgerEntry, LedgerRecorder, PaymentMethod, RecordInput,
};
use tabung_shared::types::{
    ActorId, CylinderTypeId, EntityId, RegulatorTypeId, StoveTypeId, TenantId,
};

use crate::error::StoreError;
use crate::store::TenantStore;

/// An updated inventory item together with the entry its operation posted.
#[derive(Debug, Clone)]
pub struct ItemOutcome<T> {
    /// The item after the mutation.
    pub item: T,
    /// The ledger entry recorded for the operation.
    pub entry: LedgerEntry,
}

struct OpContext {
    tenant: TenantId,
    actor: ActorId,
}

fn money(value: Decimal) -> Value {
    Value::String(value.to_string())
}

#[allow(clippy::too_many_arguments)]
fn buy_item<K, T>(
    ctx: &OpContext,
    items: &mut HashMap<K, T>,
    id: K,
    quantity: u32,
    price_per_unit: Decimal,
    payment_method: PaymentMethod,
    chart: &ChartRegistry,
    categories: &CategoryRegistry,
    ledger: &mut Vec<LedgerEntry>,
) -> Result<ItemOutcome<T>, StoreError>
where
    K: Eq + Hash + EntityId,
    T: StockItem + Clone,
{
    validate_quantity(quantity)?;
    validate_price(price_per_unit)?;

    let item = items
        .get_mut(&id)
        .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))?;

    let amount = Decimal::from(quantity) * price_per_unit;
    let mut details = item.describe();
    details.insert("quantity".to_string(), Value::from(quantity));
    details.insert("unit_price".to_string(), money(price_per_unit));

    item.receive(quantity);

    let entry = LedgerRecorder::record(
        RecordInput {
            tenant_id: ctx.tenant,
            actor_id: ctx.actor,
            category: T::purchase_category(),
            amount,
            payment_method: Some(payment_method),
            counterparty: Counterparty::Supplier,
            correlation: Some(item.correlation()),
            reference: None,
            details,
        },
        chart,
        categories,
    )?;
    ledger.push(entry.clone());

    Ok(ItemOutcome {
        item: item.clone(),
        entry,
    })
}

#[allow(clippy::too_many_arguments)]
fn sell_item<K, T>(
    ctx: &OpContext,
    items: &mut HashMap<K, T>,
    id: K,
    quantity: u32,
    price_per_unit: Option<Decimal>,
    payment_method: PaymentMethod,
    chart: &ChartRegistry,
    categories: &CategoryRegistry,
    ledger: &mut Vec<LedgerEntry>,
) -> Result<ItemOutcome<T>, StoreError>
where
    K: Eq + Hash + EntityId,
    T: StockItem + Clone,
{
    validate_quantity(quantity)?;

    let item = items
        .get_mut(&id)
        .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))?;

    // Callers may override the list price per sale.
    let unit_price = price_per_unit.unwrap_or_else(|| item.unit_price());
    validate_price(unit_price)?;

    let amount = Decimal::from(quantity) * unit_price;
    let mut details = item.describe();
    details.insert("quantity".to_string(), Value::from(quantity));
    details.insert("unit_price".to_string(), money(unit_price));

    item.issue(quantity)?;

    let entry = LedgerRecorder::record(
        RecordInput {
            tenant_id: ctx.tenant,
            actor_id: ctx.actor,
            category: T::sale_category(),
            amount,
            payment_method: Some(payment_method),
            counterparty: Counterparty::Customer,
            correlation: Some(item.correlation()),
            reference: None,
            details,
        },
        chart,
        categories,
    )?;
    ledger.push(entry.clone());

    Ok(ItemOutcome {
        item: item.clone(),
        entry,
    })
}

#[allow(clippy::too_many_arguments)]
fn update_defects<K, T>(
    ctx: &OpContext,
    items: &mut HashMap<K, T>,
    id: K,
    quantity: u32,
    action: DefectAction,
    chart: &ChartRegistry,
    categories: &CategoryRegistry,
    ledger: &mut Vec<LedgerEntry>,
) -> Result<ItemOutcome<T>, StoreError>
where
    K: Eq + Hash + EntityId,
    T: StockItem + Clone,
{
    validate_quantity(quantity)?;

    let item = items
        .get_mut(&id)
        .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))?;

    let mut details = item.describe();
    details.insert("quantity".to_string(), Value::from(quantity));
    details.insert(
        "action".to_string(),
        Value::String(action.as_str().to_string()),
    );

    match action {
        DefectAction::Mark => item.mark_defected(quantity)?,
        DefectAction::Unmark => item.unmark_defected(quantity)?,
    }

    // A pure reclassification: zero cash amount, no payment method.
    let entry = LedgerRecorder::record(
        RecordInput {
            tenant_id: ctx.tenant,
            actor_id: ctx.actor,
            category: T::defect_category(),
            amount: Decimal::ZERO,
            payment_method: None,
            counterparty: Counterparty::Internal,
            correlation: Some(item.correlation()),
            reference: None,
            details,
        },
        chart,
        categories,
    )?;
    ledger.push(entry.clone());

    Ok(ItemOutcome {
        item: item.clone(),
        entry,
    })
}

impl TenantStore {
    /// Buys cylinders from a supplier: `full += quantity`, one purchase
    /// entry of `quantity * price_per_unit`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on unknown tenant/item, zero quantity, or
    /// negative price.
    pub fn buy_cylinders(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: CylinderTypeId,
        quantity: u32,
        price_per_unit: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<CylinderType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            buy_item(
                &ctx,
                &mut state.cylinders,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "cylinder purchase recorded");
        Ok(outcome)
    }

    /// Sells cylinders to a retail customer.
    ///
    /// `price_per_unit` of `None` uses the item's list price.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when fewer
    /// than `quantity` full cylinders are on hand.
    pub fn sell_cylinders(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: CylinderTypeId,
        quantity: u32,
        price_per_unit: Option<Decimal>,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<CylinderType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            sell_item(
                &ctx,
                &mut state.cylinders,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "cylinder sale recorded");
        Ok(outcome)
    }

    /// Marks or unmarks cylinders as defected (no cash effect).
    ///
    /// Marking moves fulls into the defected pool; unmarking moves them
    /// back, returning the units to sellable inventory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when the
    /// pool the action draws on is too small.
    pub fn mark_cylinder_defects(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: CylinderTypeId,
        quantity: u32,
        action: DefectAction,
    ) -> Result<ItemOutcome<CylinderType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            update_defects(
                &ctx,
                &mut state.cylinders,
                item,
                quantity,
                action,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, action = action.as_str(), "cylinder defect update recorded");
        Ok(outcome)
    }

    /// Buys regulators from a supplier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on unknown tenant/item, zero quantity, or
    /// negative price.
    pub fn buy_regulators(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: RegulatorTypeId,
        quantity: u32,
        price_per_unit: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<RegulatorType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            buy_item(
                &ctx,
                &mut state.regulators,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "regulator purchase recorded");
        Ok(outcome)
    }

    /// Sells regulators to a retail customer.
    ///
    /// Defected units are never sold: availability is `stock - defected`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when fewer
    /// than `quantity` sellable units are on hand.
    pub fn sell_regulators(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: RegulatorTypeId,
        quantity: u32,
        price_per_unit: Option<Decimal>,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<RegulatorType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            sell_item(
                &ctx,
                &mut state.regulators,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "regulator sale recorded");
        Ok(outcome)
    }

    /// Marks or unmarks regulators as defected (no cash effect).
    ///
    /// For this family the defected pool stays inside `stock`: marking and
    /// unmarking only move the `defected` counter.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when the
    /// pool the action draws on is too small.
    pub fn mark_regulator_defects(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: RegulatorTypeId,
        quantity: u32,
        action: DefectAction,
    ) -> Result<ItemOutcome<RegulatorType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            update_defects(
                &ctx,
                &mut state.regulators,
                item,
                quantity,
                action,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, action = action.as_str(), "regulator defect update recorded");
        Ok(outcome)
    }

    /// Buys stoves from a supplier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on unknown tenant/item, zero quantity, or
    /// negative price.
    pub fn buy_stoves(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: StoveTypeId,
        quantity: u32,
        price_per_unit: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<StoveType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            buy_item(
                &ctx,
                &mut state.stoves,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "stove purchase recorded");
        Ok(outcome)
    }

    /// Sells stoves to a retail customer.
    ///
    /// Defected units are never sold: availability is `stock - defected`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when fewer
    /// than `quantity` sellable units are on hand.
    pub fn sell_stoves(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: StoveTypeId,
        quantity: u32,
        price_per_unit: Option<Decimal>,
        payment_method: PaymentMethod,
    ) -> Result<ItemOutcome<StoveType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            sell_item(
                &ctx,
                &mut state.stoves,
                item,
                quantity,
                price_per_unit,
                payment_method,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, "stove sale recorded");
        Ok(outcome)
    }

    /// Marks or unmarks stoves as defected (no cash effect).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Inventory` with `InsufficientStock` when the
    /// pool the action draws on is too small.
    pub fn mark_stove_defects(
        &self,
        tenant: TenantId,
        actor: ActorId,
        item: StoveTypeId,
        quantity: u32,
        action: DefectAction,
    ) -> Result<ItemOutcome<StoveType>, StoreError> {
        let ctx = OpContext { tenant, actor };
        let outcome = self.execute(tenant, move |state| {
            update_defects(
                &ctx,
                &mut state.stoves,
                item,
                quantity,
                action,
                &state.chart,
                &state.categories,
                &mut state.ledger,
            )
        })?;
        tracing::info!(%tenant, %item, quantity, action = action.as_str(), "stove defect update recorded");
        Ok(outcome)
    }
}
