//! Ledger error types.

use thiserror::Error;

use crate::category::CategoryCode;
use crate::chart::AccountCode;

/// Errors that can occur while recording a ledger entry.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Entry amount cannot be negative.
    #[error("Entry amount cannot be negative")]
    NegativeAmount,

    /// The category does not exist for the tenant.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryCode),

    /// The category references an account that is missing or inactive.
    ///
    /// This is a tenant-setup defect, not a caller error.
    #[error("Category {category} references missing or inactive account {account}")]
    MisconfiguredCategory {
        /// The category being recorded against.
        category: CategoryCode,
        /// The account code that failed to resolve.
        account: AccountCode,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            Self::MisconfiguredCategory { .. } => "MISCONFIGURED_CATEGORY",
        }
    }
}
