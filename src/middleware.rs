//! Request pipeline middleware.
//!
//! Three concerns wrap every route and static response: baseline security
//! headers on all responses, canonical-origin HTTPS enforcement in production,
//! and the server-failure observability hook.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{config::Config, observability::ObservabilityHook};

/// `Strict-Transport-Security` value sent with every production response.
pub const HSTS_VALUE: &str = "max-age=63072000; includeSubDomains; preload";

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");
const X_CONTENT_TYPE_OPTIONS: HeaderName = HeaderName::from_static("x-content-type-options");
const X_FRAME_OPTIONS: HeaderName = HeaderName::from_static("x-frame-options");
const X_XSS_PROTECTION: HeaderName = HeaderName::from_static("x-xss-protection");

/// Sets the baseline security headers on every response, whatever its route
/// or outcome.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));

    response
}

/// Enforces the canonical HTTPS origin in production.
///
/// GET requests that arrive over an insecure transport or for a non-canonical
/// host are answered with a permanent redirect to the canonical origin plus
/// the original path, before any later stage runs. Every production response,
/// redirect or not, carries HSTS. Outside production this is a pass-through so
/// local traffic is never redirected.
pub async fn canonical_redirect(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Response {
    if !config.is_production() {
        return next.run(request).await;
    }

    if request.method() == Method::GET && !is_canonical(&config, &request) {
        let original_path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| request.uri().path());
        let location = format!("{}{}", config.http_origin, original_path);

        tracing::debug!("Redirecting {original_path} to canonical origin");

        let mut response = (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, location)],
        )
            .into_response();
        insert_hsts(&mut response);

        return response;
    }

    let mut response = next.run(request).await;
    insert_hsts(&mut response);

    response
}

fn is_canonical(config: &Config, request: &Request) -> bool {
    let headers = request.headers();

    let secure = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        == Some("https");
    let host_matches = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        == Some(config.canonical_host.as_str());

    secure && host_matches
}

fn insert_hsts(response: &mut Response) {
    response.headers_mut().insert(
        header::STRICT_TRANSPORT_SECURITY,
        HeaderValue::from_static(HSTS_VALUE),
    );
}

/// Reports 5xx responses to the configured observability hook.
pub async fn observe_failures(
    State(hook): State<Arc<dyn ObservabilityHook>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        hook.capture_failure(response.status(), &path);
    }

    response
}
