//! Shop counterparty aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabung_shared::types::ShopId;

use super::error::ShopError;
use super::exchange::Settlement;

/// A wholesale shop the business exchanges cylinders with.
///
/// `total_due` is the single source of truth for how much the shop owes.
/// It moves only through [`Shop::apply_exchange`] and [`Shop::clear_due`],
/// in lockstep with the ledger entries the operation services record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    /// Unique identifier.
    pub id: ShopId,
    /// Shop name.
    pub name: String,
    /// Outstanding amount the shop owes; never negative.
    pub total_due: Decimal,
    /// Lifetime value of exchanges delivered to this shop.
    pub total_purchases: Decimal,
    /// Lifetime payments received from this shop.
    pub total_payments: Decimal,
    /// Lifetime full cylinders delivered to this shop.
    pub total_deliveries: u64,
}

impl Shop {
    /// Creates a shop with zeroed aggregates.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ShopId::new(),
            name: name.into(),
            total_due: Decimal::ZERO,
            total_purchases: Decimal::ZERO,
            total_payments: Decimal::ZERO,
            total_deliveries: 0,
        }
    }

    /// Folds a settled exchange into the aggregates.
    ///
    /// `units` is the balanced unit count of the exchange (fulls
    /// delivered).
    pub fn apply_exchange(&mut self, settlement: &Settlement, units: u32) {
        self.total_due += settlement.due;
        self.total_purchases += settlement.total_price;
        self.total_payments += settlement.paid;
        self.total_deliveries += u64::from(units);
    }

    /// Pays down the outstanding due.
    ///
    /// Overpayment is rejected rather than clamped, so `total_due` can
    /// never go negative.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::InvalidPayment` for non-positive amounts and
    /// `ShopError::Overpayment` when `amount` exceeds `total_due`.
    pub fn clear_due(&mut self, amount: Decimal) -> Result<(), ShopError> {
        if amount <= Decimal::ZERO {
            return Err(ShopError::InvalidPayment);
        }
        if amount > self.total_due {
            return Err(ShopError::Overpayment {
                requested: amount,
                outstanding: self.total_due,
            });
        }
        self.total_due -= amount;
        self.total_payments += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::exchange::split_settlement;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_shop_has_zero_aggregates() {
        let shop = Shop::new("Karim Traders");
        assert_eq!(shop.total_due, dec!(0));
        assert_eq!(shop.total_purchases, dec!(0));
        assert_eq!(shop.total_payments, dec!(0));
        assert_eq!(shop.total_deliveries, 0);
    }

    #[test]
    fn test_apply_exchange_updates_all_aggregates() {
        let mut shop = Shop::new("Karim Traders");
        let settlement = split_settlement(dec!(1000), dec!(600)).unwrap();
        shop.apply_exchange(&settlement, 5);

        assert_eq!(shop.total_due, dec!(400));
        assert_eq!(shop.total_purchases, dec!(1000));
        assert_eq!(shop.total_payments, dec!(600));
        assert_eq!(shop.total_deliveries, 5);
    }

    #[test]
    fn test_clear_due_reduces_balance() {
        let mut shop = Shop::new("Karim Traders");
        shop.apply_exchange(&split_settlement(dec!(1000), dec!(600)).unwrap(), 5);

        shop.clear_due(dec!(250)).unwrap();
        assert_eq!(shop.total_due, dec!(150));
        assert_eq!(shop.total_payments, dec!(850));

        shop.clear_due(dec!(150)).unwrap();
        assert_eq!(shop.total_due, dec!(0));
    }

    #[test]
    fn test_clear_due_rejects_overpayment() {
        let mut shop = Shop::new("Karim Traders");
        shop.apply_exchange(&split_settlement(dec!(1000), dec!(600)).unwrap(), 5);

        let err = shop.clear_due(dec!(401)).unwrap_err();
        assert!(matches!(
            err,
            ShopError::Overpayment {
                requested,
                outstanding,
            } if requested == dec!(401) && outstanding == dec!(400)
        ));
        // Balance untouched after the rejection.
        assert_eq!(shop.total_due, dec!(400));
        assert_eq!(shop.total_payments, dec!(600));
    }

    #[test]
    fn test_clear_due_rejects_non_positive() {
        let mut shop = Shop::new("Karim Traders");
        assert!(matches!(shop.clear_due(dec!(0)), Err(ShopError::InvalidPayment)));
        assert!(matches!(shop.clear_due(dec!(-5)), Err(ShopError::InvalidPayment)));
    }
}
