//! Tests for the report endpoint.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use sea_orm::DbErr;
use tokenboard::{
    model::{allocation::CreateShopDto, report::ReportModel},
    server::controller::{
        allocation::{create_allocation, ShopFilterParams},
        report::get_report,
    },
};

use crate::setup::{body_json, test_setup, TestSetup};

fn dto(name: &str, code: &str, district: &str, station: &str, tokens: i32) -> CreateShopDto {
    CreateShopDto {
        name: name.to_string(),
        gazette_code: Some(code.to_string()),
        district: Some(district.to_string()),
        station: Some(station.to_string()),
        category: None,
        tokens,
        expected_tokens: 0,
        avg_sale: String::new(),
        total_tokens: 0,
        allocated_tokens: String::new(),
    }
}

async fn seeded_setup() -> Result<TestSetup, DbErr> {
    let test = test_setup().await?;

    for shop in [
        dto("Big Alpha", "A10", "Alpha", "Central", 4),
        dto("Small Alpha", "A2", "Alpha", "Central", 2),
        dto("Beta Shop", "B1", "Beta", "Harbor", 3),
        dto("Idle Shop", "A5", "Alpha", "Central", 0),
    ] {
        let result = create_allocation(
            State(test.state.clone()),
            Path("planning".to_string()),
            Json(shop),
        )
        .await;
        assert!(result.is_ok());
    }

    Ok(test)
}

/// Expect the unfiltered report to carry the summary panel, grand total, and
/// natural code ordering
#[tokio::test]
async fn unfiltered_report() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    let result = get_report(
        State(test.state.clone()),
        Path("planning".to_string()),
        Query(ShopFilterParams {
            district: None,
            station: None,
        }),
    )
    .await;

    let report: ReportModel = body_json(result.unwrap().into_response()).await;

    assert_eq!(report.title, "Shop Token Manager Report");
    assert!(!report.station_wise);

    let summary = report.summary.expect("summary panel expected");
    assert_eq!(summary.token_cap, 200);
    // The idle shop is excluded from the panel count
    assert_eq!(summary.total_shops, 3);
    assert_eq!(summary.tokens_allocated, 9);
    assert_eq!(summary.remaining, 191);

    let table = report.summary_table.expect("summary table expected");
    assert_eq!(table.grand_total, 9);

    // Zero-quantity record excluded, codes naturally ordered
    assert_eq!(report.sections.len(), 2);
    let names: Vec<&str> = report.sections[0]
        .rows
        .iter()
        .map(|row| row.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["A2 - Small Alpha", "A10 - Big Alpha"]);

    Ok(())
}

/// Expect the station-filtered report to omit summary panel and table
#[tokio::test]
async fn station_report() -> Result<(), DbErr> {
    let test = seeded_setup().await?;

    let result = get_report(
        State(test.state.clone()),
        Path("planning".to_string()),
        Query(ShopFilterParams {
            district: None,
            station: Some("Harbor".to_string()),
        }),
    )
    .await;

    let report: ReportModel = body_json(result.unwrap().into_response()).await;

    assert_eq!(report.title, "HARBOR Token Management");
    assert!(report.station_wise);
    assert!(report.summary.is_none());
    assert!(report.summary_table.is_none());
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].subtotal, 3);

    Ok(())
}
