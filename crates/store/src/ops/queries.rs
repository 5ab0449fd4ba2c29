//! Read-only queries: ledger listing and point lookups.
//!
//! Queries return clones of committed state; nothing here can mutate a
//! recorded entry or a counter.

use tabung_core::inventory::{CylinderType, RegulatorType, StoveType};
use tabung_core::ledger::LedgerEntry;
use tabung_core::shop::Shop;
use tabung_shared::types::{
    CylinderTypeId, EntityId, PageRequest, PageResponse, RegulatorTypeId, ShopId, StoveTypeId,
    TenantId,
};

use crate::error::StoreError;
use crate::store::TenantStore;

impl TenantStore {
    /// Lists a tenant's ledger entries, newest first.
    ///
    /// `page` of `None` uses the configured default page size; requested
    /// sizes are capped at the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TenantNotProvisioned` if the tenant is unknown.
    pub fn list_ledger_entries(
        &self,
        tenant: TenantId,
        page: Option<PageRequest>,
    ) -> Result<PageResponse<LedgerEntry>, StoreError> {
        let page = page
            .unwrap_or(PageRequest {
                page: 1,
                per_page: self.config.default_page_size,
            })
            .clamped(self.config.max_page_size);

        self.read(tenant, |state| {
            let total = state.ledger.len() as u64;
            let data: Vec<LedgerEntry> = state
                .ledger
                .iter()
                .rev()
                .skip(page.offset())
                .take(page.limit())
                .cloned()
                .collect();
            Ok(PageResponse::new(data, page.page, page.per_page, total))
        })
    }

    /// Fetches a cylinder type by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if the id is unknown.
    pub fn get_cylinder_type(
        &self,
        tenant: TenantId,
        id: CylinderTypeId,
    ) -> Result<CylinderType, StoreError> {
        self.read(tenant, |state| {
            state
                .cylinders
                .get(&id)
                .cloned()
                .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))
        })
    }

    /// Fetches a regulator type by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if the id is unknown.
    pub fn get_regulator_type(
        &self,
        tenant: TenantId,
        id: RegulatorTypeId,
    ) -> Result<RegulatorType, StoreError> {
        self.read(tenant, |state| {
            state
                .regulators
                .get(&id)
                .cloned()
                .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))
        })
    }

    /// Fetches a stove type by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ItemNotFound` if the id is unknown.
    pub fn get_stove_type(
        &self,
        tenant: TenantId,
        id: StoveTypeId,
    ) -> Result<StoveType, StoreError> {
        self.read(tenant, |state| {
            state
                .stoves
                .get(&id)
                .cloned()
                .ok_or_else(|| StoreError::ItemNotFound(id.as_uuid()))
        })
    }

    /// Fetches a shop by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ShopNotFound` if the id is unknown.
    pub fn get_shop(&self, tenant: TenantId, id: ShopId) -> Result<Shop, StoreError> {
        self.read(tenant, |state| {
            state
                .shops
                .get(&id)
                .cloned()
                .ok_or(StoreError::ShopNotFound(id))
        })
    }
}
