//! Battery endpoint handlers: batch create, range statistics, CRUD, list.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    BatteryListResponse, BatteryRequest, BatteryRequestList, BatteryResponse,
    BatteryStatisticsResponse, PaginationMeta, PaginationParams, StatisticsParams,
};
use crate::app_state::AppState;
use crate::domain::{BatteryId, RangeQuery};
use crate::error::{ErrorResponse, GatewayError};
use crate::storage::PageRequest;

/// `POST /batteries` — Register a batch of batteries.
///
/// # Errors
///
/// Returns [`GatewayError`] on an empty batch or invalid battery fields.
#[utoipa::path(
    post,
    path = "/api/v1/batteries",
    tag = "Batteries",
    summary = "Register batteries",
    description = "Registers a non-empty batch of batteries in a single storage operation. Each entry needs a non-blank name and positive postcode and capacity.",
    request_body = BatteryRequestList,
    responses(
        (status = 200, description = "Batteries registered"),
        (status = 400, description = "Empty batch or invalid battery fields", body = ErrorResponse),
    )
)]
pub async fn add_batteries(
    State(state): State<AppState>,
    Json(request): Json<BatteryRequestList>,
) -> Result<impl IntoResponse, GatewayError> {
    let drafts = request.into_drafts()?;
    state.battery_service.create_batteries(drafts).await?;
    Ok(StatusCode::OK)
}

/// `GET /batteries` — Range-filtered statistics summary.
///
/// # Errors
///
/// Returns [`GatewayError`] when the postcode or capacity range is
/// inverted.
#[utoipa::path(
    get,
    path = "/api/v1/batteries",
    tag = "Batteries",
    summary = "Battery statistics for a postcode range",
    description = "Returns the names (sorted ascending), total watt capacity, and average watt capacity of batteries whose postcode lies in [from, to], optionally narrowed by minCapacity/maxCapacity.",
    params(StatisticsParams),
    responses(
        (status = 200, description = "Statistics summary", body = BatteryStatisticsResponse),
        (status = 400, description = "Inverted postcode or capacity range", body = ErrorResponse),
    )
)]
pub async fn get_batteries_in_range(
    State(state): State<AppState>,
    Query(params): Query<StatisticsParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let query = RangeQuery::new(params.from, params.to, params.min_capacity, params.max_capacity);
    let stats = state.battery_service.statistics_in_range(query).await?;
    Ok(Json(BatteryStatisticsResponse::from(stats)))
}

/// `GET /batteries/all` — Paginated battery listing.
///
/// # Errors
///
/// Returns [`GatewayError`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/batteries/all",
    tag = "Batteries",
    summary = "List batteries",
    description = "Returns a paginated list of all registered batteries in a deterministic order.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated battery list", body = BatteryListResponse),
    )
)]
pub async fn get_all_batteries(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let (page, per_page) = params.resolve(
        state.config.default_page_size,
        state.config.max_page_size,
    );
    let result = state
        .battery_service
        .list_batteries(PageRequest { page, per_page })
        .await?;

    let total = result.total;
    let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };

    Ok(Json(BatteryListResponse {
        data: result.items.into_iter().map(BatteryResponse::from).collect(),
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    }))
}

/// `GET /batteries/:id` — Single battery view.
///
/// # Errors
///
/// Returns [`GatewayError::BatteryNotFound`] if no battery has the id.
#[utoipa::path(
    get,
    path = "/api/v1/batteries/{id}",
    tag = "Batteries",
    summary = "Get a battery",
    params(
        ("id" = uuid::Uuid, Path, description = "Battery UUID"),
    ),
    responses(
        (status = 200, description = "Battery details", body = BatteryResponse),
        (status = 404, description = "Battery not found", body = ErrorResponse),
    )
)]
pub async fn get_battery_by_id(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    let battery = state
        .battery_service
        .battery_by_id(BatteryId::from_uuid(id))
        .await?;
    Ok(Json(BatteryResponse::from(battery)))
}

/// `PUT /batteries/:id` — Overwrite a battery's mutable fields.
///
/// # Errors
///
/// Returns [`GatewayError::BatteryNotFound`] if no battery has the id, or
/// a validation error for invalid fields.
#[utoipa::path(
    put,
    path = "/api/v1/batteries/{id}",
    tag = "Batteries",
    summary = "Update a battery",
    description = "Overwrites name, postcode, and capacity. The modification timestamp refreshes; id and creation timestamp never change.",
    params(
        ("id" = uuid::Uuid, Path, description = "Battery UUID"),
    ),
    request_body = BatteryRequest,
    responses(
        (status = 200, description = "Updated battery", body = BatteryResponse),
        (status = 400, description = "Invalid battery fields", body = ErrorResponse),
        (status = 404, description = "Battery not found", body = ErrorResponse),
    )
)]
pub async fn update_battery(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(request): Json<BatteryRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let draft = request.into_draft()?;
    let updated = state
        .battery_service
        .update_battery(BatteryId::from_uuid(id), draft)
        .await?;
    Ok(Json(BatteryResponse::from(updated)))
}

/// `DELETE /batteries/:id` — Remove a battery.
///
/// # Errors
///
/// Returns [`GatewayError::BatteryNotFound`] if no battery has the id.
#[utoipa::path(
    delete,
    path = "/api/v1/batteries/{id}",
    tag = "Batteries",
    summary = "Delete a battery",
    params(
        ("id" = uuid::Uuid, Path, description = "Battery UUID"),
    ),
    responses(
        (status = 204, description = "Battery deleted"),
        (status = 404, description = "Battery not found", body = ErrorResponse),
    )
)]
pub async fn delete_battery(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, GatewayError> {
    state
        .battery_service
        .delete_battery(BatteryId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Battery resource routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/batteries",
            get(get_batteries_in_range).post(add_batteries),
        )
        .route("/batteries/all", get(get_all_batteries))
        .route(
            "/batteries/{id}",
            get(get_battery_by_id)
                .put(update_battery)
                .delete(delete_battery),
        )
}
