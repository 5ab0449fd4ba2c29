//! Business event categories.
//!
//! A category names a business event (cylinder purchase, shop exchange,
//! due payment, ...) and fixes which two accounts the resulting ledger
//! entry touches. Categories are seeded per tenant alongside the chart.

pub mod types;
pub mod error;
pub mod registry;
pub mod seed;
pub mod template;

pub use types::{Category, CategoryCode, CategoryKind};
pub use error::CategoryError;
pub use registry::CategoryRegistry;
pub use template::render;
