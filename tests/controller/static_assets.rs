use axum::http::{header, StatusCode};
use hugin::config::Environment;
use hugin_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::setup::{get, test_app};

#[tokio::test]
/// Expect files in the application static root to be served with the cache policy
async fn serves_application_static_files() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/bundle.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        &format!("public, max-age={TEST_STATIC_MAX_AGE}")
    );

    let body = setup::read_text(response).await?;
    assert_eq!(body, TEST_BUNDLE_JS);

    Ok(())
}

#[tokio::test]
/// Expect the vendor root to serve files the application root misses
async fn falls_back_to_vendor_static_root() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/vendor.css")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = setup::read_text(response).await?;
    assert_eq!(body, TEST_VENDOR_CSS);

    Ok(())
}

#[tokio::test]
/// Expect a miss in both static roots to reach the 404 catch-all
async fn missing_asset_reaches_catch_all() -> Result<(), TestError> {
    let test = test_app(Environment::Development);

    let response = test.app.oneshot(get("/missing.png")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = setup::read_json(response).await?;
    assert_eq!(body, serde_json::json!({ "message": "404: Not Found" }));

    Ok(())
}
