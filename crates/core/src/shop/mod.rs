//! Wholesale shop counterparties.
//!
//! A shop exchanges empty cylinders for full ones, pays part of the price
//! in cash, and carries the rest as a running due balance. The aggregate
//! totals here are the operational source of truth for what a shop owes;
//! the ledger carries the matching receivable entries.

pub mod error;
pub mod exchange;
pub mod aggregate;

pub use error::ShopError;
pub use exchange::{
    ExchangeLine, ExchangeRequest, Settlement, ensure_balanced, split_settlement,
};
pub use aggregate::Shop;
