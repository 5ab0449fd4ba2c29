//! Shop cylinder exchange: full/empty swap with split payment.
//!
//! The hardest path in the engine. One exchange touches several cylinder
//! types, the shop aggregates, and up to two ledger entries; the unit of
//! work guarantees they commit together or not at all.

use serde_json::{Map, Value};

use rust_decimal::Decimal;
use tabung_core::inventory::{CylinderType, validate_quantity};
use tabung_core::ledger::{
    Counterparty, CorrelationRef, LedgerEntry, LedgerRecorder, RecordInput,
};
use tabung_core::category::CategoryCode;
use tabung_core::category::seed::codes as categories;
use tabung_core::shop::{ExchangeRequest, Settlement, Shop, ensure_balanced, split_settlement};
use tabung_shared::types::{ActorId, EntityId, TenantId};

use crate::error::StoreError;
use crate::store::TenantStore;

/// Result of a shop exchange: the new shop aggregates, every touched
/// cylinder type, and the entries recorded for the paid and due legs.
#[derive(Debug, Clone)]
pub struct ExchangeOutcome {
    /// The shop after the exchange.
    pub shop: Shop,
    /// Every cylinder type the exchange touched, post-mutation.
    pub cylinders: Vec<CylinderType>,
    /// The recorded entries: paid leg, due leg, or both.
    pub entries: Vec<LedgerEntry>,
}

fn money(value: Decimal) -> Value {
    Value::String(value.to_string())
}

fn settlement_details(shop_name: &str, settlement: &Settlement, units: u32) -> Map<String, Value> {
    let mut details = Map::new();
    details.insert("shop".to_string(), Value::String(shop_name.to_string()));
    details.insert("quantity".to_string(), Value::from(units));
    details.insert("total_price".to_string(), money(settlement.total_price));
    details.insert("paid_amount".to_string(), money(settlement.paid));
    details.insert("due".to_string(), money(settlement.due));
    details
}

impl TenantStore {
    /// Exchanges empty cylinders for full ones with a shop.
    ///
    /// Empties on the take side come in, fulls on the give side go out,
    /// and both sides must move the same unit count. The price splits into
    /// a paid leg (recorded only when `paid_amount > 0`) and a due leg
    /// (recorded against receivables only when the due is positive, and
    /// added to the shop's `total_due`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on unknown tenant/shop/item, an invalid
    /// settlement, insufficient full stock, or mismatched take/give
    /// totals. No state is mutated on any error.
    pub fn exchange_cylinders(
        &self,
        tenant: TenantId,
        actor: ActorId,
        request: ExchangeRequest,
    ) -> Result<ExchangeOutcome, StoreError> {
        let shop_id = request.shop;
        let outcome = self.execute(tenant, move |state| {
            if !state.shops.contains_key(&request.shop) {
                return Err(StoreError::ShopNotFound(request.shop));
            }
            let settlement = split_settlement(request.total_price, request.paid_amount)?;

            // Take side: empties received from the shop.
            let mut touched = Vec::new();
            let mut take_total: u32 = 0;
            for line in &request.take {
                validate_quantity(line.quantity)?;
                let cylinder = state
                    .cylinders
                    .get_mut(&line.cylinder)
                    .ok_or_else(|| StoreError::ItemNotFound(line.cylinder.as_uuid()))?;
                cylinder.receive_empties(line.quantity);
                take_total += line.quantity;
                if !touched.contains(&line.cylinder) {
                    touched.push(line.cylinder);
                }
            }

            // Give side: fulls delivered to the shop.
            let mut give_total: u32 = 0;
            for line in &request.give {
                validate_quantity(line.quantity)?;
                let cylinder = state
                    .cylinders
                    .get_mut(&line.cylinder)
                    .ok_or_else(|| StoreError::ItemNotFound(line.cylinder.as_uuid()))?;
                cylinder.issue_fulls(line.quantity)?;
                give_total += line.quantity;
                if !touched.contains(&line.cylinder) {
                    touched.push(line.cylinder);
                }
            }

            // A shop receives exactly as many units as it returns.
            ensure_balanced(take_total, give_total)?;

            let shop = state
                .shops
                .get_mut(&request.shop)
                .ok_or(StoreError::ShopNotFound(request.shop))?;
            shop.apply_exchange(&settlement, give_total);
            let shop_name = shop.name.clone();

            let correlation = request
                .vehicle
                .map(CorrelationRef::Vehicle)
                .or(Some(CorrelationRef::Shop(request.shop)));
            let details = settlement_details(&shop_name, &settlement, give_total);

            let mut entries = Vec::new();
            if settlement.paid > Decimal::ZERO {
                let entry = LedgerRecorder::record(
                    RecordInput {
                        tenant_id: tenant,
                        actor_id: actor,
                        category: CategoryCode::from(categories::EXCHANGE_CASH),
                        amount: settlement.paid,
                        payment_method: Some(request.payment_method),
                        counterparty: Counterparty::Shop(request.shop),
                        correlation,
                        reference: request.reference.clone(),
                        details: details.clone(),
                    },
                    &state.chart,
                    &state.categories,
                )?;
                state.ledger.push(entry.clone());
                entries.push(entry);
            }
            if settlement.due > Decimal::ZERO {
                // Receivable leg: non-cash, but carries the real due amount
                // so the ledger stays self-balancing.
                let entry = LedgerRecorder::record(
                    RecordInput {
                        tenant_id: tenant,
                        actor_id: actor,
                        category: CategoryCode::from(categories::EXCHANGE_CREDIT),
                        amount: settlement.due,
                        payment_method: None,
                        counterparty: Counterparty::Shop(request.shop),
                        correlation,
                        reference: request.reference.clone(),
                        details: details.clone(),
                    },
                    &state.chart,
                    &state.categories,
                )?;
                state.ledger.push(entry.clone());
                entries.push(entry);
            }

            let shop = state
                .shops
                .get(&request.shop)
                .cloned()
                .ok_or(StoreError::ShopNotFound(request.shop))?;
            let cylinders = touched
                .iter()
                .map(|id| {
                    state
                        .cylinders
                        .get(id)
                        .cloned()
                        .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(ExchangeOutcome {
                shop,
                cylinders,
                entries,
            })
        })?;
        tracing::info!(
            %tenant,
            shop = %shop_id,
            entries = outcome.entries.len(),
            "shop exchange recorded"
        );
        Ok(outcome)
    }
}
