use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use hugin::config::Environment;
use hugin_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::setup::{canonical_get, get, test_app};

#[tokio::test]
/// Expect an insecure production GET to redirect to the canonical origin
async fn redirects_insecure_get_to_canonical_origin() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    let request = Request::builder()
        .uri("/docs/guide")
        .header("host", TEST_CANONICAL_HOST)
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("{TEST_HTTP_ORIGIN}/docs/guide")
    );

    Ok(())
}

#[tokio::test]
/// Expect a mismatched host to redirect even over a secure transport
async fn redirects_mismatched_host() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    let request = Request::builder()
        .uri("/")
        .header("host", "other.example.org")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("{TEST_HTTP_ORIGIN}/")
    );

    Ok(())
}

#[tokio::test]
/// Expect the redirect to preserve the original path and query
async fn redirect_preserves_path_and_query() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    let response = test.app.oneshot(get("/api/echo?x=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("{TEST_HTTP_ORIGIN}/api/echo?x=1")
    );

    Ok(())
}

#[tokio::test]
/// Expect no response body to leak on the redirect
async fn redirect_leaks_no_body() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    let response = test.app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);

    let body = setup::read_text(response).await?;
    assert!(body.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect canonical secure production traffic to pass through
async fn canonical_request_is_not_redirected() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    let response = test.app.oneshot(canonical_get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect non-GET requests to be served rather than redirected
async fn non_get_requests_are_not_redirected() -> Result<(), TestError> {
    let test = test_app(Environment::Production);

    // Insecure POST: no redirect, but the response still carries HSTS
    let request = Request::builder()
        .method("POST")
        .uri("/api/echo?mode=post")
        .header("host", "other.example.org")
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("strict-transport-security")
        .is_some());

    Ok(())
}

#[tokio::test]
/// Expect development traffic to never be redirected
async fn development_is_never_redirected() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let request = Request::builder()
        .uri("/")
        .header("host", "other.example.org")
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
