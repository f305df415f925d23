use axum::{
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
};

use crate::{controller::pages, error::Error, model::app::AppState};

/// Documentation pages
///
/// Hands the request URL to the API module's doc handler and renders whatever
/// HTML it returns inside the index template. Matches `/docs` and everything
/// beneath it, with any HTTP method.
///
/// # Responses
/// - 200 (OK): The index template with the rendered documentation as content
/// - 404 (Not Found): The doc handler reported the page missing
/// - 4xx/5xx: The doc handler failed; its code (or 500) with the generic
///   `{"message": "<code>: <reason>"}` body
pub async fn page(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> Result<Response, Error> {
    match state.api.doc(uri.path()).await {
        Ok(doc) => Ok(pages::render_index(&state, &doc)?.into_response()),
        Err(err) if err.is_not_found() => {
            tracing::debug!("No doc page for {}", uri.path());

            Ok(pages::not_found().await)
        }
        // Doc failures take the generic error body, not the API error shape:
        // the handler's message is replaced by the status reason phrase.
        Err(err) => Err(Error::Status(err.status())),
    }
}
