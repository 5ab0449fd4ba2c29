//! Shared helpers for store integration tests.
#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tabung_core::inventory::{CylinderType, RegulatorType, StoveType};
use tabung_core::ledger::PaymentMethod;
use tabung_core::shop::Shop;
use tabung_shared::types::{ActorId, TenantId};
use tabung_store::{NewCylinderType, NewRegulatorType, NewStoveType, TenantStore};

/// A provisioned tenant with an actor, ready for operations.
pub struct TestTenant {
    pub store: TenantStore,
    pub tenant: TenantId,
    pub actor: ActorId,
}

/// Provisions a fresh tenant on a default-config store.
pub fn provisioned() -> TestTenant {
    let store = TenantStore::with_defaults();
    let tenant = TenantId::new();
    store.provision_tenant(tenant).expect("provisioning failed");
    TestTenant {
        store,
        tenant,
        actor: ActorId::new(),
    }
}

impl TestTenant {
    /// Defines a 12kg Omera cylinder type at the given list price.
    pub fn cylinder_type(&self, unit_price: Decimal) -> CylinderType {
        self.store
            .define_cylinder_type(
                self.tenant,
                NewCylinderType {
                    brand: "Omera".to_string(),
                    size: "12kg".to_string(),
                    unit_price,
                },
            )
            .expect("define cylinder type failed")
    }

    /// Defines a cylinder type and buys `full` units into stock.
    ///
    /// Note this records one purchase entry.
    pub fn stocked_cylinder_type(&self, full: u32, unit_price: Decimal) -> CylinderType {
        let item = self.cylinder_type(unit_price);
        self.store
            .buy_cylinders(
                self.tenant,
                self.actor,
                item.id,
                full,
                dec!(1000),
                PaymentMethod::Cash,
            )
            .expect("stocking buy failed")
            .item
    }

    /// Defines a 22mm regulator type at the given list price.
    pub fn regulator_type(&self, unit_price: Decimal) -> RegulatorType {
        self.store
            .define_regulator_type(
                self.tenant,
                NewRegulatorType {
                    kind: "22mm".to_string(),
                    unit_price,
                },
            )
            .expect("define regulator type failed")
    }

    /// Defines a two-burner stove type at the given list price.
    pub fn stove_type(&self, unit_price: Decimal) -> StoveType {
        self.store
            .define_stove_type(
                self.tenant,
                NewStoveType {
                    model: "SG-201".to_string(),
                    burners: 2,
                    unit_price,
                },
            )
            .expect("define stove type failed")
    }

    /// Registers a shop.
    pub fn shop(&self, name: &str) -> Shop {
        self.store
            .register_shop(self.tenant, name.to_string())
            .expect("register shop failed")
    }

    /// Number of entries currently in the tenant's ledger.
    pub fn ledger_len(&self) -> u64 {
        self.store
            .list_ledger_entries(self.tenant, None)
            .expect("listing failed")
            .meta
            .total
    }
}
