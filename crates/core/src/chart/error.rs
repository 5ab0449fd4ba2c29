//! Chart of accounts error types.

use thiserror::Error;

use super::account::AccountCode;

/// Errors that can occur when resolving or mutating the chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Account not found in the tenant's chart.
    #[error("Account not found: {0}")]
    NotFound(AccountCode),

    /// Account exists but is deactivated.
    #[error("Account {0} is inactive")]
    Inactive(AccountCode),

    /// An account with the same code already exists.
    #[error("Duplicate account code: {0}")]
    DuplicateCode(AccountCode),
}

impl ChartError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::Inactive(_) => "ACCOUNT_INACTIVE",
            Self::DuplicateCode(_) => "DUPLICATE_ACCOUNT_CODE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let code = AccountCode::from("cash");
        assert_eq!(ChartError::NotFound(code.clone()).error_code(), "ACCOUNT_NOT_FOUND");
        assert_eq!(ChartError::Inactive(code.clone()).error_code(), "ACCOUNT_INACTIVE");
        assert_eq!(
            ChartError::DuplicateCode(code).error_code(),
            "DUPLICATE_ACCOUNT_CODE"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ChartError::Inactive(AccountCode::from("payables"));
        assert_eq!(err.to_string(), "Account payables is inactive");
    }
}
