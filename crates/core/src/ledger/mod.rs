//! Immutable ledger entries and the recorder.
//!
//! Every inventory-mutating business operation posts one entry per monetary
//! leg through [`LedgerRecorder::record`]. Entries are immutable once
//! created; corrections are made by posting offsetting entries, never by
//! rewriting history.

pub mod entry;
pub mod error;
pub mod recorder;

pub use entry::{
    AccountRef, Counterparty, CorrelationRef, LedgerEntry, PaymentMethod,
};
pub use error::LedgerError;
pub use recorder::{LedgerRecorder, RecordInput};
