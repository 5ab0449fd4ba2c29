//! Integration tests for provisioning, ledger queries, and immutability.

mod common;

use common::provisioned;
use rust_decimal_macros::dec;
use tabung_core::category::seed::codes as categories;
use tabung_core::ledger::PaymentMethod;
use tabung_shared::config::StoreConfig;
use tabung_shared::types::{PageRequest, TenantId};
use tabung_store::{StoreError, TenantStore};

// ============================================================================
// Provisioning
// ============================================================================

#[test]
fn test_provisioning_is_once_only() {
    let store = TenantStore::with_defaults();
    let tenant = TenantId::new();

    store.provision_tenant(tenant).unwrap();
    let err = store.provision_tenant(tenant).unwrap_err();
    assert!(matches!(err, StoreError::TenantAlreadyProvisioned(_)));
}

#[test]
fn test_queries_require_provisioned_tenant() {
    let store = TenantStore::with_defaults();
    let err = store.list_ledger_entries(TenantId::new(), None).unwrap_err();
    assert!(matches!(err, StoreError::TenantNotProvisioned(_)));
}

#[test]
fn test_tenants_are_isolated() {
    let store = TenantStore::with_defaults();
    let a = TenantId::new();
    let b = TenantId::new();
    store.provision_tenant(a).unwrap();
    store.provision_tenant(b).unwrap();

    let item = store
        .define_cylinder_type(
            a,
            tabung_store::NewCylinderType {
                brand: "Omera".to_string(),
                size: "12kg".to_string(),
                unit_price: dec!(1450),
            },
        )
        .unwrap();

    // Tenant B cannot see tenant A's item.
    let err = store.get_cylinder_type(b, item.id).unwrap_err();
    assert!(matches!(err, StoreError::ItemNotFound(_)));
}

// ============================================================================
// Ledger queries
// ============================================================================

#[test]
fn test_list_returns_newest_first() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));
    t.store
        .sell_cylinders(t.tenant, t.actor, item.id, 1, None, PaymentMethod::Cash)
        .unwrap();

    let page = t.store.list_ledger_entries(t.tenant, None).unwrap();
    assert_eq!(page.meta.total, 2);
    assert_eq!(page.data[0].category.as_str(), categories::CYLINDER_SALE);
    assert_eq!(page.data[1].category.as_str(), categories::CYLINDER_PURCHASE);
}

#[test]
fn test_list_pagination_walks_the_ledger() {
    let t = provisioned();
    let item = t.cylinder_type(dec!(1450));
    for _ in 0..5 {
        t.store
            .buy_cylinders(t.tenant, t.actor, item.id, 1, dec!(500), PaymentMethod::Cash)
            .unwrap();
    }

    let first = t
        .store
        .list_ledger_entries(t.tenant, Some(PageRequest { page: 1, per_page: 2 }))
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.meta.total, 5);
    assert_eq!(first.meta.total_pages, 3);

    let last = t
        .store
        .list_ledger_entries(t.tenant, Some(PageRequest { page: 3, per_page: 2 }))
        .unwrap();
    assert_eq!(last.data.len(), 1);

    // No overlap between pages.
    assert!(first.data.iter().all(|e| e.id != last.data[0].id));
}

#[test]
fn test_list_respects_configured_page_caps() {
    let store = TenantStore::new(StoreConfig {
        default_page_size: 2,
        max_page_size: 3,
    });
    let tenant = TenantId::new();
    store.provision_tenant(tenant).unwrap();
    let actor = tabung_shared::types::ActorId::new();
    let item = store
        .define_cylinder_type(
            tenant,
            tabung_store::NewCylinderType {
                brand: "Omera".to_string(),
                size: "12kg".to_string(),
                unit_price: dec!(1450),
            },
        )
        .unwrap();
    for _ in 0..4 {
        store
            .buy_cylinders(tenant, actor, item.id, 1, dec!(500), PaymentMethod::Cash)
            .unwrap();
    }

    // None uses the default page size.
    let page = store.list_ledger_entries(tenant, None).unwrap();
    assert_eq!(page.data.len(), 2);

    // Oversized requests are capped at the maximum.
    let page = store
        .list_ledger_entries(tenant, Some(PageRequest { page: 1, per_page: 50 }))
        .unwrap();
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.meta.per_page, 3);
}

// ============================================================================
// Immutability
// ============================================================================

#[test]
fn test_recorded_entries_never_change() {
    let t = provisioned();
    let item = t.stocked_cylinder_type(10, dec!(1450));

    let before = t.store.list_ledger_entries(t.tenant, None).unwrap();
    let original_id = before.data[0].id;
    let original_amount = before.data[0].amount;

    // Mutating a returned entry is mutating a clone.
    let mut copy = before.data[0].clone();
    copy.amount = dec!(999999);

    // A failed operation appends nothing and rewrites nothing.
    let _ = t
        .store
        .sell_cylinders(t.tenant, t.actor, item.id, 99, None, PaymentMethod::Cash)
        .unwrap_err();

    let after = t.store.list_ledger_entries(t.tenant, None).unwrap();
    assert_eq!(after.meta.total, before.meta.total);
    assert_eq!(after.data[0].id, original_id);
    assert_eq!(after.data[0].amount, original_amount);

    // Successful operations only append.
    t.store
        .sell_cylinders(t.tenant, t.actor, item.id, 1, None, PaymentMethod::Cash)
        .unwrap();
    let appended = t.store.list_ledger_entries(t.tenant, None).unwrap();
    assert_eq!(appended.meta.total, before.meta.total + 1);
    assert!(appended.data.iter().any(|e| e.id == original_id));
}
