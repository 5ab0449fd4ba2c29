//! Category registry error types.

use thiserror::Error;

use super::types::CategoryCode;

/// Errors that can occur when resolving or mutating categories.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Category not found for the tenant.
    #[error("Category not found: {0}")]
    NotFound(CategoryCode),

    /// A category with the same code already exists.
    #[error("Duplicate category code: {0}")]
    DuplicateCode(CategoryCode),
}

impl CategoryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CATEGORY_NOT_FOUND",
            Self::DuplicateCode(_) => "DUPLICATE_CATEGORY_CODE",
        }
    }
}
