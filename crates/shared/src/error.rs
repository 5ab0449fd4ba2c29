//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// This is the envelope the surrounding controller layer maps domain errors
/// into. Domain crates define their own precise error enums and convert
/// upward at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (malformed or out-of-range input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (stock, balance, or settlement rules).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Conflict (e.g., provisioning a tenant twice).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Tenant setup defect (e.g., category referencing a missing account).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::BusinessRule(_) => 422,
            Self::Conflict(_) => 409,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Conflict(_) => "CONFLICT",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
