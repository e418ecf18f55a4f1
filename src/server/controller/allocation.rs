use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        allocation::{
            AllocationShopDto, BackfillResultDto, BackfillSkipDto, BulkReplaceDto, CreateShopDto,
            SyncResultDto, UpdateShopDto,
        },
        api::ErrorDto,
    },
    server::{
        controller::util::{normalize_filter, parse_mode},
        error::Error,
        model::app::AppState,
        service::allocation::AllocationService,
    },
};

pub static ALLOCATION_TAG: &str = "allocation";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ShopFilterParams {
    /// District name, omitted or "all" for no filter.
    pub district: Option<String>,
    /// Excise station name, omitted or "all" for no filter.
    pub station: Option<String>,
}

/// List one mode's allocation records
#[utoipa::path(
    get,
    path = "/api/allocations/{mode}",
    tag = ALLOCATION_TAG,
    params(
        ("mode" = String, Path, description = "Allocation mode, planning or real"),
        ShopFilterParams,
    ),
    responses(
        (status = 200, description = "Success when listing allocation records", body = Vec<AllocationShopDto>),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_allocations(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Query(params): Query<ShopFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;
    let district = normalize_filter(params.district);
    let station = normalize_filter(params.station);

    let shops = AllocationService::new(&state.db)
        .list(mode, district.as_deref(), station.as_deref())
        .await?;

    let dtos: Vec<AllocationShopDto> = shops.into_iter().map(AllocationShopDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an allocation record in one mode
#[utoipa::path(
    post,
    path = "/api/allocations/{mode}",
    tag = ALLOCATION_TAG,
    params(("mode" = String, Path, description = "Allocation mode, planning or real")),
    request_body = CreateShopDto,
    responses(
        (status = 201, description = "Success when creating an allocation record", body = AllocationShopDto),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 409, description = "Gazette code already exists in this mode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_allocation(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(shop): Json<CreateShopDto>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;

    let created = AllocationService::new(&state.db).create(mode, shop).await?;

    Ok((StatusCode::CREATED, Json(AllocationShopDto::from(created))))
}

/// Apply a partial update to an allocation record
#[utoipa::path(
    put,
    path = "/api/allocations/{mode}/{id}",
    tag = ALLOCATION_TAG,
    params(
        ("mode" = String, Path, description = "Allocation mode, planning or real"),
        ("id" = i32, Path, description = "Allocation record ID"),
    ),
    request_body = UpdateShopDto,
    responses(
        (status = 200, description = "Success when updating an allocation record", body = AllocationShopDto),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 404, description = "Record not found in this mode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_allocation(
    State(state): State<AppState>,
    Path((mode, id)): Path<(String, i32)>,
    Json(update): Json<UpdateShopDto>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;

    let updated = AllocationService::new(&state.db)
        .update(mode, id, update)
        .await?;

    Ok((StatusCode::OK, Json(AllocationShopDto::from(updated))))
}

/// Delete an allocation record
#[utoipa::path(
    delete,
    path = "/api/allocations/{mode}/{id}",
    tag = ALLOCATION_TAG,
    params(
        ("mode" = String, Path, description = "Allocation mode, planning or real"),
        ("id" = i32, Path, description = "Allocation record ID"),
    ),
    responses(
        (status = 200, description = "Success when deleting an allocation record", body = AllocationShopDto),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 404, description = "Record not found in this mode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_allocation(
    State(state): State<AppState>,
    Path((mode, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;

    let deleted = AllocationService::new(&state.db).delete(mode, id).await?;

    Ok((StatusCode::OK, Json(AllocationShopDto::from(deleted))))
}

/// Atomically replace one mode's entire collection
#[utoipa::path(
    post,
    path = "/api/allocations/{mode}/bulk",
    tag = ALLOCATION_TAG,
    params(("mode" = String, Path, description = "Allocation mode, planning or real")),
    request_body = BulkReplaceDto,
    responses(
        (status = 200, description = "Success when replacing the collection", body = Vec<AllocationShopDto>),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 409, description = "Duplicate gazette code within the payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bulk_replace_allocations(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Json(body): Json<BulkReplaceDto>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;

    let inserted = AllocationService::new(&state.db)
        .replace_all(mode, body.shops)
        .await?;

    let dtos: Vec<AllocationShopDto> = inserted.into_iter().map(AllocationShopDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Backfill catalog fields onto legacy planning records
#[utoipa::path(
    post,
    path = "/api/migrate-shops",
    tag = ALLOCATION_TAG,
    responses(
        (status = 200, description = "Success when backfilling legacy records", body = BackfillResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn migrate_shops(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let outcome = AllocationService::new(&state.db)
        .backfill_from_catalog()
        .await?;

    let skipped = outcome
        .skipped
        .into_iter()
        .map(|skip| BackfillSkipDto {
            id: skip.id,
            name: skip.name,
            reason: skip.reason,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(BackfillResultDto {
            updated: outcome.updated,
            total: outcome.total,
            skipped,
        }),
    ))
}

/// Copy planning records missing from the real collection
#[utoipa::path(
    post,
    path = "/api/allocations/sync",
    tag = ALLOCATION_TAG,
    responses(
        (status = 200, description = "Success when synchronizing planning to real", body = SyncResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_allocations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let created = AllocationService::new(&state.db)
        .sync_planning_to_real()
        .await?;

    Ok((StatusCode::OK, Json(SyncResultDto { created })))
}
