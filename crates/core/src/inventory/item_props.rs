//! Property-based tests for stock transitions.
//!
//! Drives each family through arbitrary operation sequences and checks the
//! counter invariants after every step: counters never go negative, the
//! defected pool never exceeds what it can draw on, and a rejected
//! transition leaves the item untouched.

use proptest::prelude::*;
use rust_decimal_macros::dec;

use super::item::{CylinderType, RegulatorType, StockItem, StoveType};

#[derive(Debug, Clone, Copy)]
enum StockOp {
    Receive(u32),
    Issue(u32),
    Mark(u32),
    Unmark(u32),
}

fn stock_op() -> impl Strategy<Value = StockOp> {
    prop_oneof![
        (1u32..20).prop_map(StockOp::Receive),
        (1u32..20).prop_map(StockOp::Issue),
        (1u32..20).prop_map(StockOp::Mark),
        (1u32..20).prop_map(StockOp::Unmark),
    ]
}

fn apply<T: StockItem + Clone + std::fmt::Debug>(
    item: &mut T,
    op: StockOp,
) -> Result<(), TestCaseError> {
    let before = item.clone();
    let result = match op {
        StockOp::Receive(q) => {
            item.receive(q);
            Ok(())
        }
        StockOp::Issue(q) => item.issue(q),
        StockOp::Mark(q) => item.mark_defected(q),
        StockOp::Unmark(q) => item.unmark_defected(q),
    };

    if result.is_err() {
        // A rejected transition must not have moved anything.
        prop_assert_eq!(item.sellable(), before.sellable(), "sellable moved on failure");
        prop_assert_eq!(item.defected(), before.defected(), "defected moved on failure");
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_cylinder_counters_stay_consistent(ops in proptest::collection::vec(stock_op(), 0..60)) {
        let mut item = CylinderType::new("Omera", "12kg", dec!(1450));
        let mut expected_total: u64 = 0;

        for op in ops {
            match op {
                StockOp::Receive(q) => expected_total += u64::from(q),
                StockOp::Issue(q) => {
                    if item.full >= q {
                        expected_total -= u64::from(q);
                    }
                }
                _ => {}
            }
            apply(&mut item, op)?;

            // Disjoint counters: the sum tracks receives minus issues.
            prop_assert_eq!(u64::from(item.total_units()), expected_total);
        }
    }

    #[test]
    fn prop_regulator_defected_is_subset_of_stock(ops in proptest::collection::vec(stock_op(), 0..60)) {
        let mut item = RegulatorType::new("22mm", dec!(350));

        for op in ops {
            apply(&mut item, op)?;
            prop_assert!(item.defected <= item.stock, "defected exceeded stock");
            prop_assert_eq!(item.sellable(), item.stock - item.defected);
        }
    }

    #[test]
    fn prop_stove_defected_is_subset_of_stock(ops in proptest::collection::vec(stock_op(), 0..60)) {
        let mut item = StoveType::new("SG-201", 2, dec!(2800));

        for op in ops {
            apply(&mut item, op)?;
            prop_assert!(item.defected <= item.stock, "defected exceeded stock");
        }
    }

    #[test]
    fn prop_issue_never_leaves_negative_sellable(
        initial in 0u32..100,
        requested in 0u32..200,
    ) {
        let mut item = CylinderType::new("Omera", "12kg", dec!(1450));
        item.receive(initial);

        match item.issue(requested.max(1)) {
            Ok(()) => prop_assert!(requested.max(1) <= initial),
            Err(_) => prop_assert_eq!(item.full, initial),
        }
    }
}
