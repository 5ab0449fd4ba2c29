//! The tenant store and its unit-of-work boundary.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tabung_shared::config::StoreConfig;
use tabung_shared::types::TenantId;

use crate::error::StoreError;
use crate::state::TenantState;

/// In-memory, tenant-partitioned store with atomic operations.
///
/// Writers are serialized per tenant, and each operation runs against a
/// working copy of the tenant state that is swapped in only on success.
/// Two concurrent sells against the same item therefore cannot race on the
/// counter read-modify-write, and a failed operation leaves no partial
/// mutation behind.
#[derive(Debug, Default)]
pub struct TenantStore {
    tenants: DashMap<TenantId, Arc<Mutex<TenantState>>>,
    pub(crate) config: StoreConfig,
}

impl TenantStore {
    /// Creates a store with the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tenants: DashMap::new(),
            config,
        }
    }

    /// Creates a store with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(StoreConfig::default())
    }

    /// Provisions a tenant: seeds the base chart of accounts and the base
    /// category list exactly once.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::TenantAlreadyProvisioned` on a repeat call.
    pub fn provision_tenant(&self, tenant: TenantId) -> Result<(), StoreError> {
        match self.tenants.entry(tenant) {
            Entry::Occupied(_) => Err(StoreError::TenantAlreadyProvisioned(tenant)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(TenantState::seeded())));
                tracing::info!(%tenant, "tenant provisioned");
                Ok(())
            }
        }
    }

    fn slot(&self, tenant: TenantId) -> Result<Arc<Mutex<TenantState>>, StoreError> {
        self.tenants
            .get(&tenant)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(StoreError::TenantNotProvisioned(tenant))
    }

    /// Runs `op` as a unit of work against the tenant's state.
    ///
    /// The operation mutates a working copy; the copy replaces the
    /// committed state only if `op` returns `Ok`. On `Err` the copy is
    /// dropped and the committed state is untouched. The per-tenant lock
    /// is held for the duration, so operations on one tenant are serial.
    ///
    /// A poisoned lock is recovered: committed state is only ever replaced
    /// wholesale, so it is consistent even if a previous holder panicked.
    pub(crate) fn execute<R>(
        &self,
        tenant: TenantId,
        op: impl FnOnce(&mut TenantState) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let slot = self.slot(tenant)?;
        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        let mut working = guard.clone();
        match op(&mut working) {
            Ok(out) => {
                *guard = working;
                Ok(out)
            }
            Err(err) => {
                tracing::warn!(%tenant, error = %err, "operation rolled back");
                Err(err)
            }
        }
    }

    /// Runs a read-only closure against the tenant's committed state.
    pub(crate) fn read<R>(
        &self,
        tenant: TenantId,
        op: impl FnOnce(&TenantState) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let slot = self.slot(tenant)?;
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        op(&guard)
    }
}
