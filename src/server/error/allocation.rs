use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AllocationError {
    /// Creating a record whose gazette code already exists in that mode.
    #[error("A shop with gazette code {0:?} already exists in this mode")]
    DuplicateCode(String),
    /// Update/delete referencing an unknown record id.
    #[error("Shop ID {0} not found")]
    NotFound(i32),
    /// Cap reduction below the currently allocated total.
    #[error("Token cap {requested} is below the currently allocated total of {allocated}")]
    InvalidCap { requested: i32, allocated: i64 },
    /// Malformed request input.
    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AllocationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateCode(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCap { .. } | Self::Validation(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
