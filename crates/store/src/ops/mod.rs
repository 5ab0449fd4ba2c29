//! Operation services: one function family per business operation.
//!
//! Every operation here takes already-validated, strongly-typed parameters
//! plus a tenant/actor context, runs inside a unit of work, and returns the
//! updated domain state together with the ledger entries it recorded, as
//! one logical result.

pub mod catalog;
pub mod exchange;
pub mod inventory;
pub mod payments;
pub mod queries;
