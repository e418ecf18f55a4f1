//! Tests for the token cap endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DbErr;
use tokenboard::{
    model::{
        allocation::{AllocationShopDto, CreateShopDto},
        settings::TokenCapDto,
    },
    server::controller::{
        allocation::create_allocation,
        settings::{get_token_cap, put_token_cap},
    },
};

use crate::setup::{body_json, test_setup};

/// Expect the default cap of 200 before any write
#[tokio::test]
async fn default_cap() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = get_token_cap(State(test.state.clone())).await;
    let cap: TokenCapDto = body_json(result.unwrap().into_response()).await;

    assert_eq!(cap.token_cap, 200);

    Ok(())
}

/// Expect a cap update to round-trip
#[tokio::test]
async fn update_cap() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = put_token_cap(
        State(test.state.clone()),
        Json(TokenCapDto { token_cap: 150 }),
    )
    .await;
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    let result = get_token_cap(State(test.state.clone())).await;
    let cap: TokenCapDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(cap.token_cap, 150);

    Ok(())
}

/// Expect lowering the cap below the allocated total to produce a 400
#[tokio::test]
async fn reject_cap_below_allocated() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = create_allocation(
        State(test.state.clone()),
        Path("planning".to_string()),
        Json(CreateShopDto {
            name: "Shop A".to_string(),
            gazette_code: Some("A1".to_string()),
            district: None,
            station: None,
            category: None,
            tokens: 30,
            expected_tokens: 0,
            avg_sale: String::new(),
            total_tokens: 0,
            allocated_tokens: String::new(),
        }),
    )
    .await;
    let created: AllocationShopDto = body_json(result.unwrap().into_response()).await;
    assert_eq!(created.tokens, 30);

    let result = put_token_cap(
        State(test.state.clone()),
        Json(TokenCapDto { token_cap: 20 }),
    )
    .await;

    assert!(result.is_err());
    let response = result.map(|_| ()).unwrap_err().into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
