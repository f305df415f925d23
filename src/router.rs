//! HTTP routing and pipeline assembly.
//!
//! [`routes`] builds the route table and the two static asset roots;
//! [`app`] wraps it in the full middleware stack: session management,
//! compression, the observability hook, canonical-origin enforcement,
//! security headers, and request tracing.

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, HeaderValue},
    middleware::{from_fn, from_fn_with_state},
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tower_sessions::{service::SignedCookie, SessionManagerLayer, SessionStore};

use crate::{
    controller::{api, docs, pages},
    error::Error,
    middleware::{canonical_redirect, observe_failures, security_headers},
    model::app::AppState,
};

/// Builds the route table with the static asset fallback.
///
/// Route misses fall through to the application static directory, then the
/// CSS-framework directory, then the 404 catch-all. Static files are served
/// with the cache lifetime from configuration; the catch-all sets its own
/// cache policy.
pub fn routes(state: AppState) -> Result<Router, Error> {
    let cache_control = HeaderValue::from_str(&format!(
        "public, max-age={}",
        state.config.static_max_age
    ))?;

    let static_files = ServeDir::new(state.config.static_dir()).fallback(
        ServeDir::new(state.config.vendor_dir()).fallback(pages::not_found.into_service()),
    );
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(static_files);

    let router = Router::new()
        .route("/", get(pages::index).fallback(pages::not_found))
        .route("/500", get(pages::error_probe).fallback(pages::not_found))
        .route("/api/{method}", any(api::dispatch))
        .route("/docs", any(docs::page))
        .route("/docs/{*path}", any(docs::page))
        .fallback_service(static_files)
        .with_state(state);

    Ok(router)
}

/// Assembles the full request pipeline around the route table.
///
/// Layer order, outermost first: tracing, security headers, canonical
/// redirect, failure observation, compression, sessions. Security headers are
/// outermost so even redirects and errors carry them; the canonical redirect
/// sits above everything that produces a body so an insecure request never
/// receives one.
pub fn app<Store>(
    state: AppState,
    session: SessionManagerLayer<Store, SignedCookie>,
) -> Result<Router, Error>
where
    Store: SessionStore + Clone,
{
    let config = state.config.clone();
    let observability = state.observability.clone();

    let router = routes(state)?
        .layer(session)
        .layer(CompressionLayer::new())
        .layer(from_fn_with_state(observability, observe_failures))
        .layer(from_fn_with_state(config, canonical_redirect))
        .layer(from_fn(security_headers))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
