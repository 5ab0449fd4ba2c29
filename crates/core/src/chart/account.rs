//! Account domain types.

use serde::{Deserialize, Serialize};
use tabung_shared::types::AccountId;

/// Account classification.
///
/// Fixed at creation; an account is never reclassified, only deactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (cash, receivables, inventory).
    Asset,
    /// Liability account (payables).
    Liability,
    /// Equity account (owner capital).
    Equity,
    /// Income account (sales and exchange revenue).
    Income,
    /// Expense account (rent, wages, fuel).
    Expense,
}

/// Human-readable account code, unique within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountCode(String);

impl AccountCode {
    /// Creates an account code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for AccountCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An account in a tenant's chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for this account.
    pub id: AccountId,
    /// Code, unique within the tenant.
    pub code: AccountCode,
    /// Human name.
    pub name: String,
    /// Classification, fixed at creation.
    pub account_type: AccountType,
    /// Whether the account may be referenced by new entries.
    pub is_active: bool,
}

impl Account {
    /// Creates a new active account.
    #[must_use]
    pub fn new(code: AccountCode, name: impl Into<String>, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new(),
            code,
            name: name.into(),
            account_type,
            is_active: true,
        }
    }
}
