//! Category domain types.

use serde::{Deserialize, Serialize};

use crate::chart::AccountCode;

/// Cash-movement classification of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Money comes into the business (sales, due payments).
    CashInflow,
    /// Money leaves the business (purchases, expenses).
    CashOutflow,
    /// Internal movement with no cash effect (defect marking, receivables).
    NonCash,
}

impl CategoryKind {
    /// Returns true if entries of this kind move cash.
    #[must_use]
    pub const fn moves_cash(&self) -> bool {
        !matches!(self, Self::NonCash)
    }
}

/// Code identifying a category, unique within a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(String);

impl CategoryCode {
    /// Creates a category code.
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

impl From<&str> for CategoryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl std::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A business event category.
///
/// Both referenced accounts must exist and be active for the tenant before
/// any entry may be recorded against this category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Code, unique within the tenant.
    pub code: CategoryCode,
    /// Account debited by entries of this category.
    pub debit_account: AccountCode,
    /// Account credited by entries of this category.
    pub credit_account: AccountCode,
    /// Cash-movement classification.
    pub kind: CategoryKind,
    /// Optional description template with `{{placeholder}}` tokens.
    pub description_template: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_moves_cash() {
        assert!(CategoryKind::CashInflow.moves_cash());
        assert!(CategoryKind::CashOutflow.moves_cash());
        assert!(!CategoryKind::NonCash.moves_cash());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&CategoryKind::CashInflow).unwrap();
        assert_eq!(json, "\"cash_inflow\"");
    }

    #[test]
    fn test_category_code_display() {
        assert_eq!(CategoryCode::from("due-payment").to_string(), "due-payment");
    }
}
