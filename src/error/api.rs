use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Error reported by an API method handler or the doc handler.
///
/// Carries an optional numeric status code; without one the error is treated
/// as a 500. A 404 code doubles as the "missing" sentinel the docs route uses
/// to distinguish an absent page from a real failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Numeric status code, when the handler supplied one.
    pub code: Option<u16>,
    /// Handler-supplied message.
    pub message: String,
}

impl ApiError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// An error without a numeric code, surfaced to clients as a 500.
    pub fn uncoded(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// The distinguished "missing" error.
    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Some(404)
    }

    /// The HTTP status this error maps to: its code when that is a valid
    /// status, otherwise 500.
    pub fn status(&self) -> StatusCode {
        self.code
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// API errors echo the handler's message verbatim, unlike the generic error
/// body which replaces it with the status reason phrase.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("API error ({:?}): {}", self.code, self.message);

        (
            self.status(),
            Json(ErrorDto {
                error: self.message,
            }),
        )
            .into_response()
    }
}
