//! Tenant store and unit-of-work layer for Tabung.
//!
//! This crate owns persistence and the transactional boundary. Every
//! business operation runs as a unit of work against a working copy of the
//! tenant's state: either every counter change and every ledger entry of
//! one logical operation commits together, or none do.
//!
//! The surrounding controller layer talks to [`TenantStore`] with
//! already-validated, strongly-typed parameters and receives either a
//! success payload or a [`StoreError`].

pub mod error;
pub mod ops;
mod state;
pub mod store;

pub use error::StoreError;
pub use ops::catalog::{NewCylinderType, NewRegulatorType, NewStoveType};
pub use ops::exchange::ExchangeOutcome;
pub use ops::inventory::ItemOutcome;
pub use ops::payments::DueClearanceOutcome;
pub use store::TenantStore;
