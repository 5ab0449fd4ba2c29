//! Integration tests for buy/sell/defect operations.

mod common;

use common::provisioned;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabung_core::category::seed::codes as categories;
use tabung_core::chart::seed::codes as accounts;
use tabung_core::inventory::{DefectAction, InventoryError};
use tabung_core::ledger::{Counterparty, CorrelationRef, PaymentMethod};
use tabung_shared::types::{CylinderTypeId, TenantId};
use tabung_store::StoreError;

// ============================================================================
// Buy
// ============================================================================

#[test]
fn test_buy_cylinders_increases_stock_and_records_purchase() {
    let t = provisioned();
    let item = t.cylinder_type(dec!(1450));
    assert_eq!(item.full, 0);

    let outcome = t
        .store
        .buy_cylinders(t.tenant, t.actor, item.id, 10, dec!(500), PaymentMethod::Cash)
        .unwrap();

    assert_eq!(outcome.item.full, 10);
    assert_eq!(outcome.entry.amount, dec!(5000));
    assert_eq!(outcome.entry.category.as_str(), categories::CYLINDER_PURCHASE);
    assert_eq!(outcome.entry.counterparty, Counterparty::Supplier);
    assert_eq!(
        outcome.entry.correlation,
        Some(CorrelationRef::Cylinder(item.id))
    );
    assert_eq!(
        outcome.entry.debit_account.code.as_str(),
        accounts::INVENTORY_CYLINDERS
    );
    assert_eq!(outcome.entry.credit_account.code.as_str(), accounts::CASH);
    assert_eq!(
        outcome.entry.details["description"],
        "Purchased 10 Omera 12kg cylinders at 500"
    );

    // The committed state matches the returned one.
    let stored = t.store.get_cylinder_type(t.tenant, item.id).unwrap();
    assert_eq!(stored.full, 10);
    assert_eq!(t.ledger_len(), 1);
}

#[test]
fn test_buy_rejects_zero_quantity() {
    let t = provisioned();
    let item = t.cylinder_type(dec!(1450));

    let err = t
        .store
        .buy_cylinders(t.tenant, t.actor, item.id, 0, dec!(500), PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Inventory(InventoryError::InvalidQuantity)
    ));
    assert_eq!(t.ledger_len(), 0);
}

#[test]
fn test_buy_rejects_negative_price() {
    let t = provisioned();
    let item = t.cylinder_type(dec!(1450));

    let err = t
        .store
        .buy_cylinders(t.tenant, t.actor, item.id, 5, dec!(-1), PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Inventory(InventoryError::NegativePrice)
    ));
}

#[test]
fn test_buy_unknown_item() {
    let t = provisioned();
    let err = t
        .store
        .buy_cylinders(
            t.tenant,
            t.actor,
            CylinderTypeId::new(),
            5,
            dec!(500),
            PaymentMethod::Cash,
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::ItemNotFound(_)));
}

#[test]
fn test_operations_require_provisioned_tenant() {
    let t = provisioned();
    let item = t.cylinder_type(dec!(1450));

    let err = t
        .store
        .buy_cylinders(
            TenantId::new(),
            t.actor,
            item.id,
            5,
            dec!(500),
            PaymentMethod::Cash,
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::TenantNotProvisioned(_)));
}

// ============================================================================
// Sell
// ============================================================================

#[test]
fn test_sell_cylinders_decreases_stock_and_records_sale() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));

    let outcome = t
        .store
        .sell_cylinders(
            t.tenant,
            t.actor,
            item.id,
            3,
            Some(dec!(1500)),
            PaymentMethod::MobileBanking,
        )
        .unwrap();

    assert_eq!(outcome.item.full, 7);
    assert_eq!(outcome.entry.amount, dec!(4500));
    assert_eq!(outcome.entry.category.as_str(), categories::CYLINDER_SALE);
    assert_eq!(outcome.entry.counterparty, Counterparty::Customer);
    assert_eq!(outcome.entry.debit_account.code.as_str(), accounts::CASH);
    assert_eq!(
        outcome.entry.credit_account.code.as_str(),
        accounts::REVENUE_CYLINDERS
    );
    assert_eq!(
        outcome.entry.payment_method,
        Some(PaymentMethod::MobileBanking)
    );
}

#[rstest]
#[case(1, dec!(1500))]
#[case(3, dec!(4500))]
#[case(10, dec!(15000))]
fn test_sell_amount_scales_with_quantity(#[case] quantity: u32, #[case] amount: Decimal) {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));

    let outcome = t
        .store
        .sell_cylinders(
            t.tenant,
            t.actor,
            item.id,
            quantity,
            Some(dec!(1500)),
            PaymentMethod::Cash,
        )
        .unwrap();
    assert_eq!(outcome.entry.amount, amount);
    assert_eq!(outcome.item.full, 10 - quantity);
}

#[test]
fn test_sell_uses_list_price_when_not_overridden() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));

    let outcome = t
        .store
        .sell_cylinders(t.tenant, t.actor, item.id, 2, None, PaymentMethod::Cash)
        .unwrap();
    assert_eq!(outcome.entry.amount, dec!(2900));
    assert_eq!(outcome.entry.details["unit_price"], "1450");
}

#[test]
fn test_sell_insufficient_stock_mutates_nothing() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));
    t.store
        .sell_cylinders(t.tenant, t.actor, item.id, 3, None, PaymentMethod::Cash)
        .unwrap();
    let entries_before = t.ledger_len();

    let err = t
        .store
        .sell_cylinders(t.tenant, t.actor, item.id, 8, None, PaymentMethod::Cash)
        .unwrap_err();

    match err {
        StoreError::Inventory(InventoryError::InsufficientStock {
            requested,
            available,
            ..
        }) => {
            assert_eq!(requested, 8);
            assert_eq!(available, 7);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let stored = t.store.get_cylinder_type(t.tenant, item.id).unwrap();
    assert_eq!(stored.full, 7);
    assert_eq!(t.ledger_len(), entries_before);
}

#[test]
fn test_sell_regulators_excludes_defected_units() {
    let t = provisioned();
    let item = t.regulator_type(dec!(350));
    t.store
        .buy_regulators(t.tenant, t.actor, item.id, 10, dec!(250), PaymentMethod::Cash)
        .unwrap();
    t.store
        .mark_regulator_defects(t.tenant, t.actor, item.id, 4, DefectAction::Mark)
        .unwrap();

    let err = t
        .store
        .sell_regulators(t.tenant, t.actor, item.id, 7, None, PaymentMethod::Cash)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Inventory(InventoryError::InsufficientStock { available: 6, .. })
    ));

    let outcome = t
        .store
        .sell_regulators(t.tenant, t.actor, item.id, 6, None, PaymentMethod::Cash)
        .unwrap();
    assert_eq!(outcome.item.stock, 4);
    assert_eq!(outcome.item.defected, 4);
}

#[test]
fn test_stove_buy_and_sell_roundtrip() {
    let t = provisioned();
    let item = t.stove_type(dec!(2800));

    t.store
        .buy_stoves(t.tenant, t.actor, item.id, 6, dec!(2200), PaymentMethod::BankTransfer)
        .unwrap();
    let outcome = t
        .store
        .sell_stoves(t.tenant, t.actor, item.id, 2, None, PaymentMethod::Cash)
        .unwrap();

    assert_eq!(outcome.item.stock, 4);
    assert_eq!(outcome.entry.amount, dec!(5600));
    assert_eq!(outcome.entry.category.as_str(), categories::STOVE_SALE);
    assert_eq!(
        outcome.entry.details["description"],
        "Sold 2 SG-201 (2-burner) stoves at 2800"
    );
}

// ============================================================================
// Defect marking
// ============================================================================

#[test]
fn test_cylinder_defect_mark_and_unmark_restores_stock() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));

    let marked = t
        .store
        .mark_cylinder_defects(t.tenant, t.actor, item.id, 3, DefectAction::Mark)
        .unwrap();
    assert_eq!(marked.item.full, 7);
    assert_eq!(marked.item.defected, 3);
    assert_eq!(marked.entry.amount, Decimal::ZERO);
    assert_eq!(marked.entry.payment_method, None);
    assert_eq!(marked.entry.counterparty, Counterparty::Internal);
    assert_eq!(marked.entry.category.as_str(), categories::CYLINDER_DEFECT);
    assert_eq!(marked.entry.details["quantity"], 3);
    assert_eq!(marked.entry.details["action"], "mark");

    // Unmarking returns cylinders to sellable stock.
    let unmarked = t
        .store
        .mark_cylinder_defects(t.tenant, t.actor, item.id, 3, DefectAction::Unmark)
        .unwrap();
    assert_eq!(unmarked.item.full, 10);
    assert_eq!(unmarked.item.defected, 0);
    assert_eq!(unmarked.entry.amount, Decimal::ZERO);
    assert_eq!(unmarked.entry.details["action"], "unmark");
}

#[test]
fn test_regulator_defect_unmark_keeps_stock_counter() {
    let t = provisioned();
    let item = t.regulator_type(dec!(350));
    t.store
        .buy_regulators(t.tenant, t.actor, item.id, 10, dec!(250), PaymentMethod::Cash)
        .unwrap();

    let marked = t
        .store
        .mark_regulator_defects(t.tenant, t.actor, item.id, 3, DefectAction::Mark)
        .unwrap();
    // Subset layout: stock holds steady, only defected moves.
    assert_eq!(marked.item.stock, 10);
    assert_eq!(marked.item.defected, 3);

    let unmarked = t
        .store
        .mark_regulator_defects(t.tenant, t.actor, item.id, 3, DefectAction::Unmark)
        .unwrap();
    assert_eq!(unmarked.item.stock, 10);
    assert_eq!(unmarked.item.defected, 0);
}

#[test]
fn test_defect_mark_requires_sellable_units() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(2, dec!(1450));
    let entries_before = t.ledger_len();

    let err = t
        .store
        .mark_cylinder_defects(t.tenant, t.actor, item.id, 3, DefectAction::Mark)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Inventory(InventoryError::InsufficientStock { available: 2, .. })
    ));
    assert_eq!(t.ledger_len(), entries_before);
}

#[test]
fn test_defect_unmark_requires_defected_units() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(5, dec!(1450));

    let err = t
        .store
        .mark_cylinder_defects(t.tenant, t.actor, item.id, 1, DefectAction::Unmark)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Inventory(InventoryError::InsufficientStock { available: 0, .. })
    ));
}
