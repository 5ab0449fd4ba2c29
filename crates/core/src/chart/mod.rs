//! Per-tenant chart of accounts.
//!
//! Every ledger entry references exactly one debit and one credit account
//! from the tenant's chart. The chart is seeded once at tenant onboarding
//! from a fixed base set; afterwards accounts may only be deactivated,
//! never reclassified.

pub mod account;
pub mod error;
pub mod registry;
pub mod seed;

pub use account::{Account, AccountCode, AccountType};
pub use error::ChartError;
pub use registry::ChartRegistry;
