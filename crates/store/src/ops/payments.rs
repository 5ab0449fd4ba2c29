//! Due clearance and general expense recording.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use tabung_core::category::CategoryCode;
use tabung_core::category::seed::codes as categories;
use tabung_core::ledger::{
    Counterparty, CorrelationRef, LedgerEntry, LedgerRecorder, PaymentMethod, RecordInput,
};
use tabung_core::shop::Shop;
use tabung_shared::types::{ActorId, ShopId, StaffId, TenantId};

use crate::error::StoreError;
use crate::store::TenantStore;

/// Result of a due clearance: the new shop aggregates and the entry.
#[derive(Debug, Clone)]
pub struct DueClearanceOutcome {
    /// The shop after the payment.
    pub shop: Shop,
    /// The recorded due-payment entry.
    pub entry: LedgerEntry,
}

fn money(value: Decimal) -> Value {
    Value::String(value.to_string())
}

impl TenantStore {
    /// Clears part of a shop's outstanding due.
    ///
    /// Overpayment is rejected, never clamped: `total_due` cannot go
    /// negative through this path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Shop` with `Overpayment` when `amount` exceeds
    /// the shop's due, or `InvalidPayment` for non-positive amounts.
    pub fn clear_shop_due(
        &self,
        tenant: TenantId,
        actor: ActorId,
        shop_id: ShopId,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<DueClearanceOutcome, StoreError> {
        let outcome = self.execute(tenant, move |state| {
            let shop = state
                .shops
                .get_mut(&shop_id)
                .ok_or(StoreError::ShopNotFound(shop_id))?;
            shop.clear_due(amount)?;
            let shop_name = shop.name.clone();
            let outstanding = shop.total_due;

            let mut details = Map::new();
            details.insert("shop".to_string(), Value::String(shop_name));
            details.insert("amount".to_string(), money(amount));
            details.insert("outstanding".to_string(), money(outstanding));

            let entry = LedgerRecorder::record(
                RecordInput {
                    tenant_id: tenant,
                    actor_id: actor,
                    category: CategoryCode::from(categories::DUE_PAYMENT),
                    amount,
                    payment_method: Some(payment_method),
                    counterparty: Counterparty::Shop(shop_id),
                    correlation: Some(CorrelationRef::Shop(shop_id)),
                    reference: None,
                    details,
                },
                &state.chart,
                &state.categories,
            )?;
            state.ledger.push(entry.clone());

            let shop = state
                .shops
                .get(&shop_id)
                .cloned()
                .ok_or(StoreError::ShopNotFound(shop_id))?;
            Ok(DueClearanceOutcome { shop, entry })
        })?;
        tracing::info!(%tenant, shop = %shop_id, %amount, "due payment recorded");
        Ok(outcome)
    }

    /// Records a general operating expense (rent, wages, fuel).
    ///
    /// Pass `staff` for wage payments so the entry is correlated with the
    /// staff member.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NonPositiveAmount` unless `amount > 0`.
    pub fn record_expense(
        &self,
        tenant: TenantId,
        actor: ActorId,
        amount: Decimal,
        purpose: String,
        payment_method: PaymentMethod,
        staff: Option<StaffId>,
    ) -> Result<LedgerEntry, StoreError> {
        let entry = self.execute(tenant, move |state| {
            if amount <= Decimal::ZERO {
                return Err(StoreError::NonPositiveAmount);
            }

            let mut details = Map::new();
            details.insert("purpose".to_string(), Value::String(purpose));
            details.insert("amount".to_string(), money(amount));

            let entry = LedgerRecorder::record(
                RecordInput {
                    tenant_id: tenant,
                    actor_id: actor,
                    category: CategoryCode::from(categories::EXPENSE_PAYMENT),
                    amount,
                    payment_method: Some(payment_method),
                    counterparty: Counterparty::Internal,
                    correlation: staff.map(CorrelationRef::Staff),
                    reference: None,
                    details,
                },
                &state.chart,
                &state.categories,
            )?;
            state.ledger.push(entry.clone());
            Ok(entry)
        })?;
        tracing::info!(%tenant, %amount, "expense recorded");
        Ok(entry)
    }
}
