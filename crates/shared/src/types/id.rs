//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ShopId` where an
//! `ActorId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access to the raw UUID behind a typed ID.
///
/// Generic store code uses this to attach entity identifiers to errors
/// without knowing which concrete ID type it is working with.
pub trait EntityId: Copy {
    /// Returns the raw UUID.
    fn as_uuid(&self) -> Uuid;
}

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl EntityId for $name {
            fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(TenantId, "Unique identifier for a tenant (one shop business).");
typed_id!(ActorId, "Unique identifier for the user performing an operation.");
typed_id!(AccountId, "Unique identifier for a chart of accounts entry.");
typed_id!(LedgerEntryId, "Unique identifier for a ledger entry.");
typed_id!(CylinderTypeId, "Unique identifier for a cylinder unit type.");
typed_id!(RegulatorTypeId, "Unique identifier for a regulator unit type.");
typed_id!(StoveTypeId, "Unique identifier for a stove unit type.");
typed_id!(ShopId, "Unique identifier for a wholesale counterparty shop.");
typed_id!(VehicleId, "Unique identifier for a delivery vehicle.");
typed_id!(StaffId, "Unique identifier for a staff member.");
