//! Exchange settlement math and balance validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabung_shared::types::{CylinderTypeId, ShopId, VehicleId};

use super::error::ShopError;
use crate::ledger::PaymentMethod;

/// One cylinder line of an exchange (take or give side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeLine {
    /// The cylinder type moved.
    pub cylinder: CylinderTypeId,
    /// Units moved.
    pub quantity: u32,
}

/// A full/empty swap with split payment.
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    /// The shop exchanged with.
    pub shop: ShopId,
    /// Empties received from the shop.
    pub take: Vec<ExchangeLine>,
    /// Fulls delivered to the shop.
    pub give: Vec<ExchangeLine>,
    /// Total price of the exchange.
    pub total_price: Decimal,
    /// Portion paid immediately.
    pub paid_amount: Decimal,
    /// How the paid portion was settled.
    pub payment_method: PaymentMethod,
    /// The delivery vehicle, if one was used.
    pub vehicle: Option<VehicleId>,
    /// Free-form reference string (delivery note number, ...).
    pub reference: Option<String>,
}

/// The paid/due split of an exchange price.
///
/// Always satisfies `paid + due == total_price` with both parts
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Total price of the exchange.
    pub total_price: Decimal,
    /// Portion settled in cash now.
    pub paid: Decimal,
    /// Portion added to the shop's due balance.
    pub due: Decimal,
}

/// Splits an exchange price into its paid and due legs.
///
/// # Errors
///
/// Returns `ShopError::InvalidSettlement` when either amount is negative or
/// the paid amount exceeds the total price.
pub fn split_settlement(total_price: Decimal, paid_amount: Decimal) -> Result<Settlement, ShopError> {
    if total_price < Decimal::ZERO || paid_amount < Decimal::ZERO || paid_amount > total_price {
        return Err(ShopError::InvalidSettlement {
            total_price,
            paid: paid_amount,
        });
    }
    Ok(Settlement {
        total_price,
        paid: paid_amount,
        due: total_price - paid_amount,
    })
}

/// Checks the exchange balance invariant: a shop receives exactly as many
/// units as it returns.
///
/// # Errors
///
/// Returns `ShopError::MismatchedExchange` when the totals differ.
pub const fn ensure_balanced(take_total: u32, give_total: u32) -> Result<(), ShopError> {
    if take_total != give_total {
        return Err(ShopError::MismatchedExchange {
            take_total,
            give_total,
        });
    }
    Ok(())
}
