use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;

use crate::{
    model::api::{ErrorDto, StatusDto},
    server::{error::Error, model::app::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Liveness check including a database round trip
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service and database are reachable", body = StatusDto),
        (status = 500, description = "Database unreachable", body = ErrorDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    entity::prelude::Setting::find().one(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(StatusDto {
            status: "OK".to_string(),
        }),
    ))
}
