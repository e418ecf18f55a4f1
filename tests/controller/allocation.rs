//! Tests for the allocation record endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DbErr;
use tokenboard::{
    model::{
        allocation::{
            AllocationShopDto, BackfillResultDto, BulkReplaceDto, CreateShopDto, SyncResultDto,
            UpdateShopDto,
        },
        catalog::MasterShopSeed,
        settings::TokenCapDto,
    },
    server::{
        controller::{
            allocation::{
                bulk_replace_allocations, create_allocation, delete_allocation, get_allocations,
                migrate_shops, sync_allocations, update_allocation, ShopFilterParams,
            },
            settings::put_token_cap,
        },
        data::master_shop::MasterShopRepository,
    },
};

use crate::setup::{body_json, test_setup, TestSetup};

fn dto(name: &str, code: Option<&str>, tokens: i32) -> CreateShopDto {
    CreateShopDto {
        name: name.to_string(),
        gazette_code: code.map(str::to_string),
        district: Some("Alpha".to_string()),
        station: Some("Central".to_string()),
        category: None,
        tokens,
        expected_tokens: 0,
        avg_sale: String::new(),
        total_tokens: 0,
        allocated_tokens: String::new(),
    }
}

fn no_filter() -> Query<ShopFilterParams> {
    Query(ShopFilterParams {
        district: None,
        station: None,
    })
}

async fn set_cap(test: &TestSetup, cap: i32) {
    let result = put_token_cap(
        State(test.state.clone()),
        Json(TokenCapDto { token_cap: cap }),
    )
    .await;

    assert!(result.is_ok());
}

/// Expect a created record to round-trip through the list endpoint
#[tokio::test]
async fn create_and_list() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop A", Some("A1"), 5)),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: AllocationShopDto = body_json(response).await;
    assert_eq!(created.name, "Shop A");
    assert_eq!(created.tokens, 5);

    let result = get_allocations(
        State(test.state.clone()),
        Path("planning".to_string()),
        no_filter(),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let shops: Vec<AllocationShopDto> = body_json(response).await;
    assert_eq!(shops.len(), 1);
    assert_eq!(shops[0].id, created.id);

    Ok(())
}

/// Expect planning creates to be clamped against the cap
#[tokio::test]
async fn create_clamps_to_cap() -> Result<(), DbErr> {
    let test = test_setup().await?;
    set_cap(&test, 10).await;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop X", Some("X1"), 15)),
    )
    .await;

    let created: AllocationShopDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(created.tokens, 10);

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop Y", Some("Y1"), 5)),
    )
    .await;

    let created: AllocationShopDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(created.tokens, 0);

    Ok(())
}

/// Expect a duplicate gazette code to produce a 409 Conflict
#[tokio::test]
async fn create_duplicate_code_conflicts() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop A", Some("A1"), 5)),
    )
    .await;
    assert!(result.is_ok());

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop B", Some("A1"), 5)),
    )
    .await;

    assert!(result.is_err());
    let response = result.map(|_| ()).unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect an unknown mode segment to produce a 400 Bad Request
#[tokio::test]
async fn unknown_mode_is_rejected() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = get_allocations(
        State(test.state.clone()),
        Path("draft".to_string()),
        no_filter(),
    )
    .await;

    assert!(result.is_err());
    let response = result.map(|_| ()).unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect updates through the wrong mode to produce a 404 Not Found
#[tokio::test]
async fn update_wrong_mode_not_found() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop A", Some("A1"), 5)),
    )
    .await;
    let created: AllocationShopDto = body_json(result.unwrap().into_response()).await;

    let result = update_allocation(
        State(test.state.clone()),
        Path(("real".to_string(), created.id)),
        Json(UpdateShopDto {
            tokens: Some(3),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let response = result.map(|_| ()).unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect delete to succeed once and 404 afterwards
#[tokio::test]
async fn delete_then_not_found() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(dto("Shop A", Some("A1"), 5)),
    )
    .await;
    let created: AllocationShopDto = body_json(result.unwrap().into_response()).await;

    let result = delete_allocation(
        State(test.state.clone()),
        Path(("planning".to_string(), created.id)),
    )
    .await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = delete_allocation(
        State(test.state.clone()),
        Path(("planning".to_string(), created.id)),
    )
    .await;
    assert!(result.is_err());
    assert_eq!(
        result.map(|_| ()).unwrap_err().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect the bulk replace to clamp sequentially in payload order
#[tokio::test]
async fn bulk_replace_clamps_sequentially() -> Result<(), DbErr> {
    let test = test_setup().await?;
    set_cap(&test, 10).await;

    let result = bulk_replace_allocations(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(BulkReplaceDto {
            shops: vec![
                dto("Shop A", Some("A1"), 6),
                dto("Shop B", Some("B1"), 6),
                dto("Shop C", Some("C1"), 6),
            ],
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let shops: Vec<AllocationShopDto> = body_json(response).await;
    let tokens: Vec<i32> = shops.iter().map(|shop| shop.tokens).collect();
    assert_eq!(tokens, vec![6, 4, 0]);

    Ok(())
}

/// Expect the backfill endpoint to link code-less records to the catalog
/// and report the ones it cannot resolve
#[tokio::test]
async fn migrate_backfills_legacy_records() -> Result<(), DbErr> {
    let test = test_setup().await?;

    MasterShopRepository::new(&test.state.db)
        .insert_missing(vec![MasterShopSeed {
            gazette_code: "A1".to_string(),
            locality: "North Bar".to_string(),
            annual_excise_tax: None,
            category: Some("Bar".to_string()),
            district: "Alpha".to_string(),
            excise_station: "Central".to_string(),
        }])
        .await?;

    for name in ["North Bar", "Ghost Shop"] {
        let result = create_allocation(
            State(test.state.clone()),
            Path("planning".to_string()),
            Json(dto(name, None, 2)),
        )
        .await;
        assert!(result.is_ok());
    }

    let result = migrate_shops(State(test.state.clone())).await;
    let outcome: BackfillResultDto = body_json(result.unwrap().into_response()).await;

    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].name, "Ghost Shop");

    let result = get_allocations(
        State(test.state.clone()),
        Path("planning".to_string()),
        no_filter(),
    )
    .await;
    let shops: Vec<AllocationShopDto> = body_json(result.unwrap().into_response()).await;
    let linked = shops.iter().find(|shop| shop.name == "North Bar").unwrap();
    assert_eq!(linked.gazette_code.as_deref(), Some("A1"));
    assert_eq!(linked.district.as_deref(), Some("Alpha"));

    Ok(())
}

/// Expect sync to report created records once and zero on the second run
#[tokio::test]
async fn sync_creates_then_noop() -> Result<(), DbErr> {
    let test = test_setup().await?;

    for (name, code) in [("Shop A", "A1"), ("Shop B", "B1")] {
        let result = create_allocation(
            State(test.state.clone()),
            Path("planning".to_string()),
            Json(dto(name, Some(code), 2)),
        )
        .await;
        assert!(result.is_ok());
    }

    let result = sync_allocations(State(test.state.clone())).await;
    let created: SyncResultDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(created.created, 2);

    let result = sync_allocations(State(test.state.clone())).await;
    let created: SyncResultDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(created.created, 0);

    let result = get_allocations(
        State(test.state.clone()),
        Path("real".to_string()),
        no_filter(),
    )
    .await;
    let real: Vec<AllocationShopDto> = body_json(result.unwrap().into_response()).await;
    assert_eq!(real.len(), 2);
    assert!(real.iter().all(|shop| shop.allocated_tokens.is_empty()));

    Ok(())
}
