//! Catalog operations: defining unit types and registering shops.
//!
//! These create the records the trading operations act on. Counters start
//! at zero and no ledger entry is recorded; stock arrives through buys.

use rust_decimal::Decimal;

use tabung_core::inventory::{CylinderType, RegulatorType, StoveType, validate_price};
use tabung_core::shop::Shop;
use tabung_shared::types::TenantId;

use crate::error::StoreError;
use crate::store::TenantStore;

/// Specification for a new cylinder unit type.
#[derive(Debug, Clone)]
pub struct NewCylinderType {
    /// Brand name (e.g. "Omera").
    pub brand: String,
    /// Size label (e.g. "12kg").
    pub size: String,
    /// List price per full cylinder.
    pub unit_price: Decimal,
}

/// Specification for a new regulator unit type.
#[derive(Debug, Clone)]
pub struct NewRegulatorType {
    /// Regulator kind label.
    pub kind: String,
    /// List price per unit.
    pub unit_price: Decimal,
}

/// Specification for a new stove unit type.
#[derive(Debug, Clone)]
pub struct NewStoveType {
    /// Model name.
    pub model: String,
    /// Number of burners.
    pub burners: u8,
    /// List price per unit.
    pub unit_price: Decimal,
}

impl TenantStore {
    /// Defines a cylinder unit type with zero counters.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the tenant is unknown or the price is
    /// negative.
    pub fn define_cylinder_type(
        &self,
        tenant: TenantId,
        spec: NewCylinderType,
    ) -> Result<CylinderType, StoreError> {
        self.execute(tenant, move |state| {
            validate_price(spec.unit_price)?;
            let item = CylinderType::new(spec.brand, spec.size, spec.unit_price);
            let created = item.clone();
            state.cylinders.insert(item.id, item);
            Ok(created)
        })
    }

    /// Defines a regulator unit type with zero counters.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the tenant is unknown or the price is
    /// negative.
    pub fn define_regulator_type(
        &self,
        tenant: TenantId,
        spec: NewRegulatorType,
    ) -> Result<RegulatorType, StoreError> {
        self.execute(tenant, move |state| {
            validate_price(spec.unit_price)?;
            let item = RegulatorType::new(spec.kind, spec.unit_price);
            let created = item.clone();
            state.regulators.insert(item.id, item);
            Ok(created)
        })
    }

    /// Defines a stove unit type with zero counters.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the tenant is unknown or the price is
    /// negative.
    pub fn define_stove_type(
        &self,
        tenant: TenantId,
        spec: NewStoveType,
    ) -> Result<StoveType, StoreError> {
        self.execute(tenant, move |state| {
            validate_price(spec.unit_price)?;
            let item = StoveType::new(spec.model, spec.burners, spec.unit_price);
            let created = item.clone();
            state.stoves.insert(item.id, item);
            Ok(created)
        })
    }

    /// Registers a wholesale shop with zeroed aggregates.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TenantNotProvisioned` if the tenant is unknown.
    pub fn register_shop(&self, tenant: TenantId, name: String) -> Result<Shop, StoreError> {
        self.execute(tenant, move |state| {
            let shop = Shop::new(name);
            let created = shop.clone();
            state.shops.insert(shop.id, shop);
            Ok(created)
        })
    }
}
