//! Per-tenant state: registries, inventory, shops, and the ledger.

use std::collections::HashMap;

use tabung_core::category::CategoryRegistry;
use tabung_core::chart::ChartRegistry;
use tabung_core::inventory::{CylinderType, RegulatorType, StoveType};
use tabung_core::ledger::LedgerEntry;
use tabung_core::shop::Shop;
use tabung_shared::types::{CylinderTypeId, RegulatorTypeId, ShopId, StoveTypeId};

/// Everything the store holds for one tenant.
///
/// `Clone` is load-bearing: a unit of work runs against a clone and the
/// clone is swapped in only when the operation succeeds. The ledger is
/// append-only; nothing in this crate updates or removes an entry once it
/// is pushed.
#[derive(Debug, Clone)]
pub(crate) struct TenantState {
    pub(crate) chart: ChartRegistry,
    pub(crate) categories: CategoryRegistry,
    pub(crate) cylinders: HashMap<CylinderTypeId, CylinderType>,
    pub(crate) regulators: HashMap<RegulatorTypeId, RegulatorType>,
    pub(crate) stoves: HashMap<StoveTypeId, StoveType>,
    pub(crate) shops: HashMap<ShopId, Shop>,
    pub(crate) ledger: Vec<LedgerEntry>,
}

impl TenantState {
    /// Fresh state with the base chart and category list seeded.
    pub(crate) fn seeded() -> Self {
        Self {
            chart: ChartRegistry::base(),
            categories: CategoryRegistry::base(),
            cylinders: HashMap::new(),
            regulators: HashMap::new(),
            stoves: HashMap::new(),
            shops: HashMap::new(),
            ledger: Vec::new(),
        }
    }
}
