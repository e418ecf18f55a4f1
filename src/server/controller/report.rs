use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, report::ReportModel},
    server::{
        controller::{allocation::ShopFilterParams, util::{normalize_filter, parse_mode}},
        error::Error,
        model::app::AppState,
        service::{
            allocation::AllocationService,
            report::{build_report, ReportFilter},
            settings::SettingsService,
        },
    },
};

pub static REPORT_TAG: &str = "report";

/// Build the print-ready report for one mode
#[utoipa::path(
    get,
    path = "/api/reports/{mode}",
    tag = REPORT_TAG,
    params(
        ("mode" = String, Path, description = "Allocation mode, planning or real"),
        ShopFilterParams,
    ),
    responses(
        (status = 200, description = "Success when building the report", body = ReportModel),
        (status = 400, description = "Unknown allocation mode", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(mode): Path<String>,
    Query(params): Query<ShopFilterParams>,
) -> Result<impl IntoResponse, Error> {
    let mode = parse_mode(&mode)?;

    let filter = ReportFilter {
        district: normalize_filter(params.district),
        station: normalize_filter(params.station),
    };

    let shops = AllocationService::new(&state.db).list(mode, None, None).await?;
    let cap = SettingsService::new(&state.db).get_cap().await?;

    let report = build_report(mode, &shops, &filter, cap);

    Ok((StatusCode::OK, Json(report)))
}
