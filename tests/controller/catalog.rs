//! Tests for the master catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DbErr;
use tokenboard::{
    model::catalog::{CatalogStatsDto, DistrictDto, MasterShopDto, MasterShopSeed, StationDto},
    server::{
        controller::catalog::{
            get_catalog_stats, get_categories, get_districts, get_excise_stations,
            get_master_shop_by_code, get_master_shops, CatalogFilterParams, StationFilterParams,
        },
        data::master_shop::MasterShopRepository,
    },
};

use crate::setup::{body_json, test_setup, TestSetup};

fn seed(
    code: &str,
    locality: &str,
    district: &str,
    station: &str,
    category: Option<&str>,
) -> MasterShopSeed {
    MasterShopSeed {
        gazette_code: code.to_string(),
        locality: locality.to_string(),
        annual_excise_tax: None,
        category: category.map(str::to_string),
        district: district.to_string(),
        excise_station: station.to_string(),
    }
}

async fn seeded_setup() -> Result<TestSetup, DbErr> {
    let test = test_setup().await?;

    MasterShopRepository::new(&test.state.db)
        .insert_missing(vec![
            seed("A1", "North Bar", "Alpha", "Central", Some("OPEN")),
            seed("A2", "South Bar", "Alpha", "North", Some("Bar")),
            seed("B1", "East Depot", "Beta", "Harbor", None),
        ])
        .await?;

    Ok(test)
}

/// Expect the listing to honor filters and the "all" sentinel
#[tokio::test]
async fn list_with_filters() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    let result = get_master_shops(
        State(test.state.clone()),
        Query(CatalogFilterParams {
            district: Some("Alpha".to_string()),
            station: Some("all".to_string()),
            category: None,
            search: None,
        }),
    )
    .await;

    let shops: Vec<MasterShopDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(shops.len(), 2);
    assert!(shops.iter().all(|shop| shop.district == "Alpha"));

    Ok(())
}

/// Expect stats to count shops, districts, station names, and categories,
/// with a station name shared by two districts counted once
#[tokio::test]
async fn stats() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    MasterShopRepository::new(&test.state.db)
        .insert_missing(vec![seed("G1", "West Bar", "Gamma", "Central", None)])
        .await?;

    let result = get_catalog_stats(State(test.state.clone())).await;
    let stats: CatalogStatsDto = body_json(result.unwrap().into_response()).await;

    assert_eq!(stats.total_shops, 4);
    assert_eq!(stats.total_districts, 3);
    assert_eq!(stats.total_stations, 3);
    assert_eq!(stats.total_categories, 2);

    Ok(())
}

/// Expect the code lookup to return the entry or a 404
#[tokio::test]
async fn lookup_by_code() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    let result = get_master_shop_by_code(State(test.state.clone()), Path("B1".to_string())).await;
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let shop: MasterShopDto = body_json(response).await;
    assert_eq!(shop.locality, "East Depot");

    let result = get_master_shop_by_code(State(test.state.clone()), Path("Z9".to_string())).await;
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the dropdown sources to list distinct values
#[tokio::test]
async fn dropdown_sources() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    let result = get_districts(State(test.state.clone())).await;
    let districts: Vec<DistrictDto> = body_json(result.unwrap().into_response()).await;
    let names: Vec<&str> = districts.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);

    let result = get_excise_stations(
        State(test.state.clone()),
        Query(StationFilterParams {
            district: Some("Alpha".to_string()),
        }),
    )
    .await;
    let stations: Vec<StationDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(stations.len(), 2);
    assert!(stations.iter().all(|s| s.district == "Alpha"));

    let result = get_categories(State(test.state.clone())).await;
    let categories: Vec<String> = body_json(result.unwrap().into_response()).await;
    assert_eq!(categories, vec!["Bar".to_string(), "OPEN".to_string()]);

    Ok(())
}
