//! Inventory error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during stock transitions.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The operation asks for more units than are available.
    ///
    /// `available` is the count the operation could actually draw on:
    /// sellable units for sells and marks, defected units for unmarks.
    #[error("Insufficient stock for item {item}: requested {requested}, available {available}")]
    InsufficientStock {
        /// The item the operation targeted.
        item: Uuid,
        /// Units requested.
        requested: u32,
        /// Units available to the operation.
        available: u32,
    },

    /// Quantity must be greater than zero.
    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    /// Unit price cannot be negative.
    #[error("Unit price cannot be negative")]
    NegativePrice,
}

impl InventoryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            Self::InvalidQuantity => "INVALID_QUANTITY",
            Self::NegativePrice => "NEGATIVE_PRICE",
        }
    }
}
