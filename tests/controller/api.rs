use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use hugin::config::Environment;
use hugin_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::setup::{get, test_app};

#[tokio::test]
/// Expect a successful method to respond 200 with its result wrapped
async fn returns_result_for_successful_method() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/api/echo?x=1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "result": { "x": "1" } }));

    Ok(())
}

#[tokio::test]
/// Expect a coded method failure to use its code and echo its message
async fn returns_coded_error_for_failing_method() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/api/forbidden")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "error": "nope" }));

    Ok(())
}

#[tokio::test]
/// Expect an uncoded method failure to surface as 500 with the message echoed
async fn returns_internal_error_for_uncoded_failure() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/api/broken")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "error": "nope" }));

    Ok(())
}

#[tokio::test]
/// Expect an unknown method to fall through to the 404 catch-all body
async fn returns_not_found_for_unknown_method() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/api/missing")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "message": "404: Not Found" }));

    Ok(())
}

#[tokio::test]
/// Expect dispatch to accept any HTTP method, not only GET
async fn dispatches_non_get_methods() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let request = Request::builder()
        .method("PUT")
        .uri("/api/echo?mode=put")
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "result": { "mode": "put" } }));

    Ok(())
}
