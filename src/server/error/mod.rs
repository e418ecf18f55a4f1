//! Error types for the Tokenboard server application.
//!
//! Domain-specific error types live in submodules (allocation bookkeeping,
//! configuration) and are aggregated into a single [`Error`] enum. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions.

pub mod allocation;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{allocation::AllocationError, config::ConfigError},
};

/// Main error type for the Tokenboard server application.
///
/// Aggregates domain-specific and external library errors into a single
/// unified type, with `#[from]` conversions enabling the `?` operator
/// throughout the service and controller layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Allocation bookkeeping error (duplicate code, unknown record, invalid cap).
    #[error(transparent)]
    AllocationError(#[from] AllocationError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Allocation errors carry their own status mapping (404/409/400); everything
/// else is treated as an internal server error with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AllocationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
