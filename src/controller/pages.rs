use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use tera::Context;

use crate::{error::Error, model::api::MessageDto, model::app::AppState};

/// Renders the index template with the standard locals.
///
/// Every render sees the configuration and the two cache-busting query
/// suffixes; `content` is the pre-rendered HTML the docs route injects, empty
/// on the landing page.
pub fn render_index(state: &AppState, content: &str) -> Result<Html<String>, Error> {
    let mut context = Context::new();
    context.insert("config", state.config.as_ref());
    context.insert("bundle", &state.assets.bundle);
    context.insert("style", &state.assets.style);
    context.insert("content", content);

    Ok(Html(state.templates.render("index.html", &context)?))
}

/// Landing page
///
/// # Responses
/// - 200 (OK): The rendered index template
/// - 500 (Internal Server Error): The template failed to render
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, Error> {
    render_index(&state, "")
}

/// Diagnostic endpoint that always fails
///
/// Raises a generic internal error so the terminal error handling can be
/// verified end to end on a live deployment.
///
/// # Responses
/// - 500 (Internal Server Error): Always
pub async fn error_probe() -> Result<Response, Error> {
    Err(Error::Status(StatusCode::INTERNAL_SERVER_ERROR))
}

/// Catch-all for routes, API methods, and docs pages that do not exist
///
/// # Responses
/// - 404 (Not Found): Always, with the uniform `{"message": "404: Not Found"}` body
pub async fn not_found() -> Response {
    let mut response = (
        StatusCode::NOT_FOUND,
        Json(MessageDto {
            message: "404: Not Found".to_string(),
        }),
    )
        .into_response();

    // Dynamic response: keep it out of the static asset cache policy
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    response
}
