use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, settings::TokenCapDto},
    server::{error::Error, model::app::AppState, service::settings::SettingsService},
};

pub static SETTINGS_TAG: &str = "settings";

/// Read the global token cap
#[utoipa::path(
    get,
    path = "/api/settings/token-cap",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "Success when reading the token cap", body = TokenCapDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_token_cap(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let token_cap = SettingsService::new(&state.db).get_cap().await?;

    Ok((StatusCode::OK, Json(TokenCapDto { token_cap })))
}

/// Update the global token cap
#[utoipa::path(
    put,
    path = "/api/settings/token-cap",
    tag = SETTINGS_TAG,
    request_body = TokenCapDto,
    responses(
        (status = 200, description = "Success when updating the token cap", body = TokenCapDto),
        (status = 400, description = "Cap below the currently allocated total", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_token_cap(
    State(state): State<AppState>,
    Json(body): Json<TokenCapDto>,
) -> Result<impl IntoResponse, Error> {
    let token_cap = SettingsService::new(&state.db)
        .set_cap(body.token_cap)
        .await?;

    Ok((StatusCode::OK, Json(TokenCapDto { token_cap })))
}
