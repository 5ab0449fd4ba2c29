//! Store error types.

use thiserror::Error;
use uuid::Uuid;

use tabung_core::inventory::InventoryError;
use tabung_core::ledger::LedgerError;
use tabung_core::shop::ShopError;
use tabung_shared::AppError;
use tabung_shared::types::{ShopId, TenantId};

/// Errors returned by the operation services.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The tenant has not been provisioned.
    #[error("Tenant not provisioned: {0}")]
    TenantNotProvisioned(TenantId),

    /// The tenant has already been provisioned.
    #[error("Tenant already provisioned: {0}")]
    TenantAlreadyProvisioned(TenantId),

    /// No inventory item with this id exists for the tenant.
    #[error("Inventory item not found: {0}")]
    ItemNotFound(Uuid),

    /// No shop with this id exists for the tenant.
    #[error("Shop not found: {0}")]
    ShopNotFound(ShopId),

    /// Amount must be greater than zero.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// A stock rule was violated.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Recording the ledger entry failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A shop rule was violated.
    #[error(transparent)]
    Shop(#[from] ShopError),
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::TenantNotProvisioned(_) => "TENANT_NOT_PROVISIONED",
            Self::TenantAlreadyProvisioned(_) => "TENANT_ALREADY_PROVISIONED",
            Self::ItemNotFound(_) => "ITEM_NOT_FOUND",
            Self::ShopNotFound(_) => "SHOP_NOT_FOUND",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::Inventory(inner) => inner.error_code(),
            Self::Ledger(inner) => inner.error_code(),
            Self::Shop(inner) => inner.error_code(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::TenantNotProvisioned(_)
            | StoreError::ItemNotFound(_)
            | StoreError::ShopNotFound(_) => Self::NotFound(err.to_string()),
            StoreError::TenantAlreadyProvisioned(_) => Self::Conflict(err.to_string()),
            StoreError::NonPositiveAmount => Self::Validation(err.to_string()),
            StoreError::Inventory(inner) => match inner {
                InventoryError::InsufficientStock { .. } => Self::BusinessRule(err.to_string()),
                InventoryError::InvalidQuantity | InventoryError::NegativePrice => {
                    Self::Validation(err.to_string())
                }
            },
            StoreError::Ledger(inner) => match inner {
                LedgerError::NegativeAmount => Self::Validation(err.to_string()),
                LedgerError::CategoryNotFound(_) => Self::NotFound(err.to_string()),
                LedgerError::MisconfiguredCategory { .. } => Self::Configuration(err.to_string()),
            },
            StoreError::Shop(inner) => match inner {
                ShopError::InvalidPayment => Self::Validation(err.to_string()),
                ShopError::MismatchedExchange { .. }
                | ShopError::Overpayment { .. }
                | ShopError::InvalidSettlement { .. } => Self::BusinessRule(err.to_string()),
            },
        }
    }
}
