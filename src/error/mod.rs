//! Error types for the hugin server.
//!
//! All route-level failures funnel into the single [`Error`] type, whose
//! `IntoResponse` implementation is the terminal error handler for the request
//! pipeline: it logs the failure and maps it to an HTTP status with a JSON body.
//!
//! Two response shapes exist on purpose. Errors surfaced by the API dispatch
//! shim echo the handler's message verbatim as `{"error": ...}`, while every
//! other failure is reduced to `{"message": "<code>: <reason>"}` built from the
//! standard status text so internal error text never reaches the client.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{api::ApiError, config::ConfigError},
    model::api::MessageDto,
};

/// Main error type for the hugin server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Error surfaced by an API method or the doc handler.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A bare HTTP status raised by a route, rendered with its reason phrase.
    #[error("{0}")]
    Status(StatusCode),
    /// Template engine error (parse failure at startup, render failure per request).
    #[error(transparent)]
    Template(#[from] tera::Error),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
    /// Session store error (Valkey connection, command execution).
    #[error(transparent)]
    SessionStore(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    Scheduler(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Filesystem error (asset reads during startup hashing).
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A computed header value was not valid HTTP (static cache policy).
    #[error(transparent)]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),
}

/// Converts application errors into HTTP responses.
///
/// API errors keep their own mapping (numeric code or 500, message echoed).
/// A raised [`StatusCode`] keeps its code but takes the generic body. Anything
/// else is an unexpected failure: it is logged in full and collapsed to a 500
/// so no internal detail leaks.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::Api(err) => err.into_response(),
            Self::Status(status) => {
                if status.is_server_error() {
                    tracing::error!("Route raised {status}");
                }

                status_response(status)
            }
            err => {
                tracing::error!("{err}");

                status_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Builds the generic error body `{"message": "<code>: <reason>"}` for a status.
pub fn status_response(status: StatusCode) -> Response {
    let reason = status.canonical_reason().unwrap_or("Unknown Error");

    (
        status,
        Json(MessageDto {
            message: format!("{}: {}", status.as_u16(), reason),
        }),
    )
        .into_response()
}
