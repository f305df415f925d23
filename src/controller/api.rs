use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    controller::pages,
    error::Error,
    model::{api::ResultDto, app::AppState},
    service::api::QueryParams,
};

/// Generic API dispatch
///
/// Looks the `{method}` path segment up in the installed API module and
/// invokes the handler with the request's query parameters. The route accepts
/// any HTTP method; the API module decides what its handlers do with the
/// parameters.
///
/// # Responses
/// - 200 (OK): `{"result": ...}` with the method's result value
/// - 404 (Not Found): No such method is installed
/// - 4xx/5xx: The method failed; its numeric code (or 500 when it has none)
///   with `{"error": "<message>"}` echoing the method's error message
pub async fn dispatch(
    State(state): State<AppState>,
    Path(method): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Response, Error> {
    let Some(handler) = state.api.handler(&method) else {
        tracing::debug!("Unknown API method {method:?}");

        return Ok(pages::not_found().await);
    };

    let result = handler(params).await.map_err(Error::Api)?;

    Ok(Json(ResultDto { result }).into_response())
}
