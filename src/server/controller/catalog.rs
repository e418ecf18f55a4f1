use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogStatsDto, DistrictDto, MasterShopDto, StationDto},
    },
    server::{
        controller::util::normalize_filter,
        data::master_shop::{MasterShopFilter, MasterShopRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static CATALOG_TAG: &str = "catalog";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct CatalogFilterParams {
    /// District name, omitted or "all" for no filter.
    pub district: Option<String>,
    /// Excise station name, omitted or "all" for no filter.
    pub station: Option<String>,
    /// Category name, omitted or "all" for no filter.
    pub category: Option<String>,
    /// Case-insensitive substring match on gazette code or locality.
    pub search: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct StationFilterParams {
    /// District name, omitted or "all" for no filter.
    pub district: Option<String>,
}

/// List master catalog entries
#[utoipa::path(
    get,
    path = "/api/master-shops",
    tag = CATALOG_TAG,
    params(CatalogFilterParams),
    responses(
        (status = 200, description = "Success when listing master catalog entries", body = Vec<MasterShopDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_master_shops(
    State(state): State<AppState>,
    Query(params): Query<CatalogFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let filter = MasterShopFilter {
        district: normalize_filter(params.district),
        station: normalize_filter(params.station),
        category: normalize_filter(params.category),
        search: params.search.filter(|search| !search.is_empty()),
    };

    let shops = MasterShopRepository::new(&state.db).list(&filter).await?;
    let dtos: Vec<MasterShopDto> = shops.into_iter().map(MasterShopDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Aggregate counts over the master catalog
#[utoipa::path(
    get,
    path = "/api/master-shops/stats",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when computing catalog statistics", body = CatalogStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_catalog_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let repository = MasterShopRepository::new(&state.db);

    let stats = CatalogStatsDto {
        total_shops: repository.count().await?,
        total_districts: repository.list_districts().await?.len() as u64,
        total_stations: repository.list_station_names().await?.len() as u64,
        total_categories: repository.list_categories().await?.len() as u64,
    };

    Ok((StatusCode::OK, Json(stats)))
}

/// Look up a master catalog entry by gazette code
#[utoipa::path(
    get,
    path = "/api/master-shops/by-code/{code}",
    tag = CATALOG_TAG,
    params(("code" = String, Path, description = "Gazette code")),
    responses(
        (status = 200, description = "Success when finding the catalog entry", body = MasterShopDto),
        (status = 404, description = "No entry with this gazette code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_master_shop_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let shop = MasterShopRepository::new(&state.db)
        .get_by_code(&code)
        .await?;

    let Some(shop) = shop else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("No master shop with gazette code {code:?}"),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(MasterShopDto::from(shop))).into_response())
}

/// List distinct districts
#[utoipa::path(
    get,
    path = "/api/districts",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing districts", body = Vec<DistrictDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_districts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let districts = MasterShopRepository::new(&state.db).list_districts().await?;

    let dtos: Vec<DistrictDto> = districts
        .into_iter()
        .map(|name| DistrictDto { name })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List distinct excise stations, optionally within one district
#[utoipa::path(
    get,
    path = "/api/excise-stations",
    tag = CATALOG_TAG,
    params(StationFilterParams),
    responses(
        (status = 200, description = "Success when listing excise stations", body = Vec<StationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_excise_stations(
    State(state): State<AppState>,
    Query(params): Query<StationFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let district = normalize_filter(params.district);

    let stations = MasterShopRepository::new(&state.db)
        .list_stations(district.as_deref())
        .await?;

    let dtos: Vec<StationDto> = stations
        .into_iter()
        .map(|(name, district)| StationDto { name, district })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List distinct categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing categories", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = MasterShopRepository::new(&state.db).list_categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}
