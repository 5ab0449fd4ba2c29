//! Ledger entry domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabung_shared::types::{
    AccountId, ActorId, CylinderTypeId, LedgerEntryId, RegulatorTypeId, ShopId, StaffId,
    StoveTypeId, TenantId, VehicleId,
};

use crate::category::CategoryCode;
use crate::chart::{Account, AccountCode};

/// How a cash leg was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Mobile banking (bKash, Nagad, ...).
    MobileBanking,
    /// Cheque.
    Cheque,
}

/// Who the business transacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Counterparty {
    /// A supplier the business buys from.
    Supplier,
    /// A retail customer.
    Customer,
    /// A wholesale shop counterparty.
    Shop(ShopId),
    /// No external party (internal reclassification).
    Internal,
}

/// The one domain record an entry is correlated with, if any.
///
/// A tagged variant rather than a bag of optional id fields: an entry
/// carries at most one correlation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CorrelationRef {
    /// A cylinder unit type.
    Cylinder(CylinderTypeId),
    /// A regulator unit type.
    Regulator(RegulatorTypeId),
    /// A stove unit type.
    Stove(StoveTypeId),
    /// A delivery vehicle.
    Vehicle(VehicleId),
    /// A wholesale shop.
    Shop(ShopId),
    /// A staff member.
    Staff(StaffId),
}

/// A resolved account reference carried on an entry.
///
/// Carrying the code alongside the id keeps the audit trail readable
/// without a chart lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// The account id.
    pub id: AccountId,
    /// The account code at recording time.
    pub code: AccountCode,
}

impl From<&Account> for AccountRef {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            code: account.code.clone(),
        }
    }
}

/// One immutable record of a financial event.
///
/// Always names exactly one debit account, one credit account, and a
/// non-negative monetary amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: LedgerEntryId,
    /// The tenant this entry belongs to.
    pub tenant_id: TenantId,
    /// The account debited.
    pub debit_account: AccountRef,
    /// The account credited.
    pub credit_account: AccountRef,
    /// Monetary amount (non-negative; zero for pure reclassifications).
    pub amount: Decimal,
    /// The business event category.
    pub category: CategoryCode,
    /// How the leg was settled; `None` for non-cash legs.
    pub payment_method: Option<PaymentMethod>,
    /// Who the business transacted with.
    pub counterparty: Counterparty,
    /// At most one correlated domain record.
    pub correlation: Option<CorrelationRef>,
    /// Free-form reference string (delivery note, receipt number, ...).
    pub reference: Option<String>,
    /// Structured details payload, always carrying a rendered description.
    pub details: serde_json::Value,
    /// The user who performed the operation.
    pub recorded_by: ActorId,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
}
