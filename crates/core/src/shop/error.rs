//! Shop error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during shop operations.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The take and give sets of an exchange moved different unit counts.
    #[error("Shop exchange is unbalanced: took {take_total} units, gave {give_total} units")]
    MismatchedExchange {
        /// Units received from the shop.
        take_total: u32,
        /// Units delivered to the shop.
        give_total: u32,
    },

    /// A due payment exceeds what the shop owes.
    #[error("Payment of {requested} exceeds outstanding due of {outstanding}")]
    Overpayment {
        /// The payment the caller asked for.
        requested: Decimal,
        /// What the shop actually owes.
        outstanding: Decimal,
    },

    /// The settlement amounts of an exchange do not make sense.
    #[error("Invalid settlement: paid {paid} against total price {total_price}")]
    InvalidSettlement {
        /// The total price of the exchange.
        total_price: Decimal,
        /// The paid amount.
        paid: Decimal,
    },

    /// Payment amount must be greater than zero.
    #[error("Payment amount must be greater than zero")]
    InvalidPayment,
}

impl ShopError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MismatchedExchange { .. } => "MISMATCHED_EXCHANGE",
            Self::Overpayment { .. } => "OVERPAYMENT",
            Self::InvalidSettlement { .. } => "INVALID_SETTLEMENT",
            Self::InvalidPayment => "INVALID_PAYMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ShopError::MismatchedExchange {
                take_total: 5,
                give_total: 3
            }
            .error_code(),
            "MISMATCHED_EXCHANGE"
        );
        assert_eq!(
            ShopError::Overpayment {
                requested: dec!(500),
                outstanding: dec!(400)
            }
            .error_code(),
            "OVERPAYMENT"
        );
        assert_eq!(ShopError::InvalidPayment.error_code(), "INVALID_PAYMENT");
    }

    #[test]
    fn test_mismatch_display() {
        let err = ShopError::MismatchedExchange {
            take_total: 5,
            give_total: 3,
        };
        assert_eq!(
            err.to_string(),
            "Shop exchange is unbalanced: took 5 units, gave 3 units"
        );
    }
}
