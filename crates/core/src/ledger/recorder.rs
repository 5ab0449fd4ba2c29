//! Ledger recorder: builds one immutable entry per monetary leg.
//!
//! The recorder is pure: it resolves the category and its accounts against
//! the registries it is handed and returns the built entry. Persistence and
//! the transactional boundary belong to the caller. Callers invoke
//! [`LedgerRecorder::record`] exactly once per monetary leg of a business
//! operation.

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use tabung_shared::types::{ActorId, LedgerEntryId, TenantId};

use super::entry::{AccountRef, Counterparty, CorrelationRef, LedgerEntry, PaymentMethod};
use super::error::LedgerError;
use crate::category::{template, Category, CategoryCode, CategoryRegistry};
use crate::chart::{Account, AccountCode, ChartRegistry};

/// Input for recording one ledger entry.
#[derive(Debug, Clone)]
pub struct RecordInput {
    /// The tenant the entry belongs to.
    pub tenant_id: TenantId,
    /// The user performing the operation.
    pub actor_id: ActorId,
    /// The business event category to record against.
    pub category: CategoryCode,
    /// Monetary amount (non-negative; zero for pure reclassifications).
    pub amount: Decimal,
    /// How the leg was settled; `None` for non-cash legs.
    pub payment_method: Option<PaymentMethod>,
    /// Who the business transacted with.
    pub counterparty: Counterparty,
    /// At most one correlated domain record.
    pub correlation: Option<CorrelationRef>,
    /// Free-form reference string.
    pub reference: Option<String>,
    /// Extra details; also the payload for the description template.
    pub details: Map<String, Value>,
}

/// Stateless service that validates and builds ledger entries.
pub struct LedgerRecorder;

impl LedgerRecorder {
    /// Validates the input against the registries and builds the entry.
    ///
    /// Resolution is fail-fast: an unknown category or a category whose
    /// debit/credit account is missing or inactive rejects the whole
    /// operation before anything is built.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeAmount`, `CategoryNotFound`, or
    /// `MisconfiguredCategory`.
    pub fn record(
        input: RecordInput,
        chart: &ChartRegistry,
        categories: &CategoryRegistry,
    ) -> Result<LedgerEntry, LedgerError> {
        if input.amount < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }

        let category = categories
            .resolve(&input.category)
            .map_err(|_| LedgerError::CategoryNotFound(input.category.clone()))?;

        let debit = Self::resolve_leg(chart, category, &category.debit_account)?;
        let credit = Self::resolve_leg(chart, category, &category.credit_account)?;

        let mut details = input.details;
        let description = category
            .description_template
            .as_deref()
            .map(|tpl| template::render(tpl, &details))
            .unwrap_or_default();
        details.insert("description".to_string(), Value::String(description));

        Ok(LedgerEntry {
            id: LedgerEntryId::new(),
            tenant_id: input.tenant_id,
            debit_account: AccountRef::from(debit),
            credit_account: AccountRef::from(credit),
            amount: input.amount,
            category: input.category,
            payment_method: input.payment_method,
            counterparty: input.counterparty,
            correlation: input.correlation,
            reference: input.reference,
            details: Value::Object(details),
            recorded_by: input.actor_id,
            recorded_at: Utc::now(),
        })
    }

    fn resolve_leg<'a>(
        chart: &'a ChartRegistry,
        category: &Category,
        account: &AccountCode,
    ) -> Result<&'a Account, LedgerError> {
        chart
            .resolve_active(account)
            .map_err(|_| LedgerError::MisconfiguredCategory {
                category: category.code.clone(),
                account: account.clone(),
            })
    }
}
