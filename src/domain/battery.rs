//! Battery record entity and the draft shape used for create/update.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::BatteryId;

/// A registered battery record.
///
/// `id` and `created_at` are set by the store on insertion and never change
/// afterward. `modified_at` is refreshed by the store on every save; the
/// service layer never touches either timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Battery {
    /// Unique identifier (immutable after creation).
    pub id: BatteryId,

    /// Human-readable battery name.
    pub name: String,

    /// Postal-code zone the battery is installed in.
    pub postcode: i32,

    /// Energy capacity in watts.
    pub watt_capacity: i64,

    /// Insertion timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last mutation.
    pub modified_at: DateTime<Utc>,
}

impl Battery {
    /// Overwrites the mutable fields from a draft. Timestamps are left to
    /// the store's save hook.
    pub fn apply(&mut self, draft: &BatteryDraft) {
        self.name.clone_from(&draft.name);
        self.postcode = draft.postcode;
        self.watt_capacity = draft.watt_capacity;
    }
}

/// An unpersisted battery: the `(name, postcode, capacity)` triple carried
/// by create and update requests before the store assigns identity and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryDraft {
    /// Human-readable battery name.
    pub name: String,
    /// Postal-code zone.
    pub postcode: i32,
    /// Energy capacity in watts.
    pub watt_capacity: i64,
}

impl BatteryDraft {
    /// Creates a draft from its three components.
    #[must_use]
    pub fn new(name: impl Into<String>, postcode: i32, watt_capacity: i64) -> Self {
        Self {
            name: name.into(),
            postcode,
            watt_capacity,
        }
    }
}
