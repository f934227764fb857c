//! Type-safe battery identifier.
//!
//! [`BatteryId`] is a newtype wrapper around [`uuid::Uuid`] (v4) so that
//! battery identifiers cannot be confused with other UUIDs in the system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a battery record.
///
/// Wraps a UUID v4. Assigned by the store when the record is inserted and
/// immutable thereafter. Used as the map key in the in-memory store and as
/// the path parameter in `/batteries/{id}` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatteryId(uuid::Uuid);

impl BatteryId {
    /// Creates a new random `BatteryId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a `BatteryId` from an existing [`uuid::Uuid`].
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner [`uuid::Uuid`].
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for BatteryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BatteryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<uuid::Uuid> for BatteryId {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl From<BatteryId> for uuid::Uuid {
    fn from(id: BatteryId) -> Self {
        id.0
    }
}
