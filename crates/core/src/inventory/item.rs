//! Unit types per product family and their stock transitions.
//!
//! Counter layouts differ by family and the difference is load-bearing:
//!
//! - Cylinders keep disjoint `full` / `empty` / `defected` counters, so
//!   defect marking moves units out of `full` and unmarking moves them
//!   back (a repaired cylinder is sellable again).
//! - Regulators and stoves keep `defected` as a subset of `stock`:
//!   marking only grows `defected`, unmarking only shrinks it, and
//!   `stock - defected` is what may be sold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabung_shared::types::{CylinderTypeId, EntityId, RegulatorTypeId, StoveTypeId};
use uuid::Uuid;

use super::error::InventoryError;
use crate::category::CategoryCode;
use crate::category::seed::codes as categories;
use crate::ledger::CorrelationRef;

/// Direction of a defect reclassification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefectAction {
    /// Move units from sellable stock into the defected pool.
    Mark,
    /// Move units out of the defected pool.
    Unmark,
}

impl DefectAction {
    /// Lowercase name used in entry details.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mark => "mark",
            Self::Unmark => "unmark",
        }
    }
}

/// Rejects zero quantities.
///
/// # Errors
///
/// Returns `InventoryError::InvalidQuantity` when `quantity` is zero.
pub const fn validate_quantity(quantity: u32) -> Result<(), InventoryError> {
    if quantity == 0 {
        return Err(InventoryError::InvalidQuantity);
    }
    Ok(())
}

/// Rejects negative unit prices.
///
/// # Errors
///
/// Returns `InventoryError::NegativePrice` when `price` is negative.
pub fn validate_price(price: Decimal) -> Result<(), InventoryError> {
    if price < Decimal::ZERO {
        return Err(InventoryError::NegativePrice);
    }
    Ok(())
}

/// Common stock behavior the operation services rely on.
///
/// Implementations guarantee counters never go negative: every transition
/// checks its precondition and fails without mutating on violation.
pub trait StockItem {
    /// Raw item id for error context.
    fn item_id(&self) -> Uuid;

    /// List price per unit, used when a sale does not override it.
    fn unit_price(&self) -> Decimal;

    /// Units currently available for sale.
    fn sellable(&self) -> u32;

    /// Units currently in the defected pool.
    fn defected(&self) -> u32;

    /// Adds purchased units to sellable stock.
    fn receive(&mut self, quantity: u32);

    /// Removes sold units from sellable stock.
    fn issue(&mut self, quantity: u32) -> Result<(), InventoryError>;

    /// Moves units into the defected pool.
    fn mark_defected(&mut self, quantity: u32) -> Result<(), InventoryError>;

    /// Moves units out of the defected pool.
    fn unmark_defected(&mut self, quantity: u32) -> Result<(), InventoryError>;

    /// Correlation reference for ledger entries touching this item.
    fn correlation(&self) -> CorrelationRef;

    /// Category recorded on purchases of this family.
    fn purchase_category() -> CategoryCode;

    /// Category recorded on sales of this family.
    fn sale_category() -> CategoryCode;

    /// Category recorded on defect reclassifications of this family.
    fn defect_category() -> CategoryCode;

    /// Dimension fields merged into the entry details payload.
    fn describe(&self) -> Map<String, Value>;
}

// Shared transitions for the stock/defected subset layout.

fn subset_issue(
    item: Uuid,
    stock: &mut u32,
    defected: u32,
    quantity: u32,
) -> Result<(), InventoryError> {
    let available = stock.saturating_sub(defected);
    if available < quantity {
        return Err(InventoryError::InsufficientStock {
            item,
            requested: quantity,
            available,
        });
    }
    *stock -= quantity;
    Ok(())
}

fn subset_mark(
    item: Uuid,
    stock: u32,
    defected: &mut u32,
    quantity: u32,
) -> Result<(), InventoryError> {
    let available = stock.saturating_sub(*defected);
    if available < quantity {
        return Err(InventoryError::InsufficientStock {
            item,
            requested: quantity,
            available,
        });
    }
    *defected += quantity;
    Ok(())
}

fn subset_unmark(item: Uuid, defected: &mut u32, quantity: u32) -> Result<(), InventoryError> {
    if *defected < quantity {
        return Err(InventoryError::InsufficientStock {
            item,
            requested: quantity,
            available: *defected,
        });
    }
    *defected -= quantity;
    Ok(())
}

/// A cylinder unit type (brand + size) with disjoint counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CylinderType {
    /// Unique identifier.
    pub id: CylinderTypeId,
    /// Brand name (e.g. "Omera").
    pub brand: String,
    /// Size label (e.g. "12kg").
    pub size: String,
    /// List price per full cylinder.
    pub unit_price: Decimal,
    /// Sellable full cylinders.
    pub full: u32,
    /// Empty cylinders held for refill.
    pub empty: u32,
    /// Cylinders pulled out as defected.
    pub defected: u32,
}

impl CylinderType {
    /// Creates a cylinder type with zero counters.
    #[must_use]
    pub fn new(brand: impl Into<String>, size: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: CylinderTypeId::new(),
            brand: brand.into(),
            size: size.into(),
            unit_price,
            full: 0,
            empty: 0,
            defected: 0,
        }
    }

    /// Adds empties received from a shop during an exchange.
    pub fn receive_empties(&mut self, quantity: u32) {
        self.empty = self.empty.saturating_add(quantity);
    }

    /// Removes fulls delivered to a shop during an exchange.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::InsufficientStock` when fewer than
    /// `quantity` full cylinders are on hand.
    pub fn issue_fulls(&mut self, quantity: u32) -> Result<(), InventoryError> {
        self.issue(quantity)
    }

    /// Total physical units tracked for this type.
    #[must_use]
    pub const fn total_units(&self) -> u32 {
        self.full + self.empty + self.defected
    }
}

impl StockItem for CylinderType {
    fn item_id(&self) -> Uuid {
        self.id.as_uuid()
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    fn sellable(&self) -> u32 {
        self.full
    }

    fn defected(&self) -> u32 {
        self.defected
    }

    fn receive(&mut self, quantity: u32) {
        self.full = self.full.saturating_add(quantity);
    }

    fn issue(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if self.full < quantity {
            return Err(InventoryError::InsufficientStock {
                item: self.item_id(),
                requested: quantity,
                available: self.full,
            });
        }
        self.full -= quantity;
        Ok(())
    }

    fn mark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if self.full < quantity {
            return Err(InventoryError::InsufficientStock {
                item: self.item_id(),
                requested: quantity,
                available: self.full,
            });
        }
        self.full -= quantity;
        self.defected += quantity;
        Ok(())
    }

    fn unmark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if self.defected < quantity {
            return Err(InventoryError::InsufficientStock {
                item: self.item_id(),
                requested: quantity,
                available: self.defected,
            });
        }
        self.defected -= quantity;
        self.full += quantity;
        Ok(())
    }

    fn correlation(&self) -> CorrelationRef {
        CorrelationRef::Cylinder(self.id)
    }

    fn purchase_category() -> CategoryCode {
        CategoryCode::from(categories::CYLINDER_PURCHASE)
    }

    fn sale_category() -> CategoryCode {
        CategoryCode::from(categories::CYLINDER_SALE)
    }

    fn defect_category() -> CategoryCode {
        CategoryCode::from(categories::CYLINDER_DEFECT)
    }

    fn describe(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("brand".to_string(), Value::String(self.brand.clone()));
        map.insert("size".to_string(), Value::String(self.size.clone()));
        map
    }
}

/// A regulator unit type with the stock/defected subset layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatorType {
    /// Unique identifier.
    pub id: RegulatorTypeId,
    /// Regulator kind label (e.g. "22mm low-pressure").
    pub kind: String,
    /// List price per unit.
    pub unit_price: Decimal,
    /// Units on hand, including defected ones.
    pub stock: u32,
    /// Units marked defected (always a subset of `stock`).
    pub defected: u32,
}

impl RegulatorType {
    /// Creates a regulator type with zero counters.
    #[must_use]
    pub fn new(kind: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            id: RegulatorTypeId::new(),
            kind: kind.into(),
            unit_price,
            stock: 0,
            defected: 0,
        }
    }
}

impl StockItem for RegulatorType {
    fn item_id(&self) -> Uuid {
        self.id.as_uuid()
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    fn sellable(&self) -> u32 {
        self.stock.saturating_sub(self.defected)
    }

    fn defected(&self) -> u32 {
        self.defected
    }

    fn receive(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }

    fn issue(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_issue(self.item_id(), &mut self.stock, self.defected, quantity)
    }

    fn mark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_mark(self.item_id(), self.stock, &mut self.defected, quantity)
    }

    fn unmark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_unmark(self.item_id(), &mut self.defected, quantity)
    }

    fn correlation(&self) -> CorrelationRef {
        CorrelationRef::Regulator(self.id)
    }

    fn purchase_category() -> CategoryCode {
        CategoryCode::from(categories::REGULATOR_PURCHASE)
    }

    fn sale_category() -> CategoryCode {
        CategoryCode::from(categories::REGULATOR_SALE)
    }

    fn defect_category() -> CategoryCode {
        CategoryCode::from(categories::REGULATOR_DEFECT)
    }

    fn describe(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("kind".to_string(), Value::String(self.kind.clone()));
        map
    }
}

/// A stove unit type with the stock/defected subset layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoveType {
    /// Unique identifier.
    pub id: StoveTypeId,
    /// Model name.
    pub model: String,
    /// Number of burners.
    pub burners: u8,
    /// List price per unit.
    pub unit_price: Decimal,
    /// Units on hand, including defected ones.
    pub stock: u32,
    /// Units marked defected (always a subset of `stock`).
    pub defected: u32,
}

impl StoveType {
    /// Creates a stove type with zero counters.
    #[must_use]
    pub fn new(model: impl Into<String>, burners: u8, unit_price: Decimal) -> Self {
        Self {
            id: StoveTypeId::new(),
            model: model.into(),
            burners,
            unit_price,
            stock: 0,
            defected: 0,
        }
    }
}

impl StockItem for StoveType {
    fn item_id(&self) -> Uuid {
        self.id.as_uuid()
    }

    fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    fn sellable(&self) -> u32 {
        self.stock.saturating_sub(self.defected)
    }

    fn defected(&self) -> u32 {
        self.defected
    }

    fn receive(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_add(quantity);
    }

    fn issue(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_issue(self.item_id(), &mut self.stock, self.defected, quantity)
    }

    fn mark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_mark(self.item_id(), self.stock, &mut self.defected, quantity)
    }

    fn unmark_defected(&mut self, quantity: u32) -> Result<(), InventoryError> {
        subset_unmark(self.item_id(), &mut self.defected, quantity)
    }

    fn correlation(&self) -> CorrelationRef {
        CorrelationRef::Stove(self.id)
    }

    fn purchase_category() -> CategoryCode {
        CategoryCode::from(categories::STOVE_PURCHASE)
    }

    fn sale_category() -> CategoryCode {
        CategoryCode::from(categories::STOVE_SALE)
    }

    fn defect_category() -> CategoryCode {
        CategoryCode::from(categories::STOVE_DEFECT)
    }

    fn describe(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("model".to_string(), Value::String(self.model.clone()));
        map.insert("burners".to_string(), Value::from(self.burners));
        map
    }
}
