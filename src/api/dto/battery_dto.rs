//! Battery request/response DTOs and boundary validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::{Battery, BatteryDraft, BatteryId, BatteryStatistics};
use crate::error::GatewayError;

/// Fixed wire format for entity timestamps (UTC).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}

/// One battery in a create or update request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryRequest {
    /// Battery name; must not be blank.
    pub name: String,
    /// Postal-code zone; must be positive.
    pub postcode: i32,
    /// Watt capacity; must be positive.
    pub capacity: i64,
}

impl BatteryRequest {
    /// Validates the request fields and converts to a domain draft.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] for a blank name or a
    /// non-positive postcode or capacity.
    pub fn into_draft(self) -> Result<BatteryDraft, GatewayError> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "battery name cannot be blank".to_string(),
            ));
        }
        if self.postcode <= 0 {
            return Err(GatewayError::InvalidRequest(
                "postcode must be a positive number".to_string(),
            ));
        }
        if self.capacity <= 0 {
            return Err(GatewayError::InvalidRequest(
                "capacity must be a positive number".to_string(),
            ));
        }
        Ok(BatteryDraft::new(self.name, self.postcode, self.capacity))
    }
}

/// Request body for `POST /batteries`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryRequestList {
    /// Batteries to register; must not be empty.
    pub batteries: Vec<BatteryRequest>,
}

impl BatteryRequestList {
    /// Validates the batch and converts every entry to a draft.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the list is empty or
    /// any entry fails field validation.
    pub fn into_drafts(self) -> Result<Vec<BatteryDraft>, GatewayError> {
        if self.batteries.is_empty() {
            return Err(GatewayError::InvalidRequest(
                "battery requests list cannot be empty".to_string(),
            ));
        }
        self.batteries
            .into_iter()
            .map(BatteryRequest::into_draft)
            .collect()
    }
}

/// Single battery view for read, update, and list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryResponse {
    /// Battery identifier.
    #[schema(value_type = uuid::Uuid)]
    pub id: BatteryId,
    /// Battery name.
    pub name: String,
    /// Postal-code zone.
    pub postcode: i32,
    /// Watt capacity.
    pub watt_capacity: i64,
    /// Creation timestamp (`yyyy-MM-dd HH:mm:ss`, UTC).
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "2026-08-24 10:30:00")]
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp (`yyyy-MM-dd HH:mm:ss`, UTC).
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "2026-08-24 10:30:00")]
    pub modified_at: DateTime<Utc>,
}

impl From<Battery> for BatteryResponse {
    fn from(battery: Battery) -> Self {
        Self {
            id: battery.id,
            name: battery.name,
            postcode: battery.postcode,
            watt_capacity: battery.watt_capacity,
            created_at: battery.created_at,
            modified_at: battery.modified_at,
        }
    }
}

/// Query parameters for `GET /batteries`.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsParams {
    /// Lower postcode bound (inclusive).
    pub from: i32,
    /// Upper postcode bound (inclusive).
    pub to: i32,
    /// Optional minimum watt capacity (inclusive).
    #[serde(default)]
    pub min_capacity: Option<i64>,
    /// Optional maximum watt capacity (inclusive).
    #[serde(default)]
    pub max_capacity: Option<i64>,
}

/// Response body for `GET /batteries`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryStatisticsResponse {
    /// Matched battery names, sorted ascending.
    pub batteries: Vec<String>,
    /// Sum of matched watt capacities.
    pub total_watt_capacity: i64,
    /// Average watt capacity, rounded to two decimals.
    pub average_watt_capacity: f64,
}

impl From<BatteryStatistics> for BatteryStatisticsResponse {
    fn from(stats: BatteryStatistics) -> Self {
        Self {
            batteries: stats.battery_names,
            total_watt_capacity: stats.total_watt_capacity,
            average_watt_capacity: stats.average_watt_capacity,
        }
    }
}

/// Paginated list response for `GET /batteries/all`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatteryListResponse {
    /// Battery views on this page.
    pub data: Vec<BatteryResponse>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}
