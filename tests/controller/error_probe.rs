use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use hugin::config::Environment;
use hugin_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::setup::{get, test_app};

#[tokio::test]
/// Expect the diagnostic endpoint to always produce the generic 500 body
async fn returns_internal_server_error() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/500")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = setup::read_json(response).await?;
    assert_eq!(
        body,
        serde_json::json!({ "message": "500: Internal Server Error" })
    );

    Ok(())
}

#[tokio::test]
/// Expect non-GET methods on the probe to fall through to the 404 catch-all
async fn returns_not_found_for_non_get() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let request = Request::builder()
        .method("POST")
        .uri("/500")
        .body(Body::empty())
        .unwrap();
    let response = test.app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
