//! In-process router tests driven through `tower::ServiceExt::oneshot`,
//! exercising `create_router()` without binding a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use storefront_core::create_router;
use tower::ServiceExt;

mod common;

#[tokio::test]
#[serial_test::serial]
async fn products_served_without_a_socket() {
    // ---
    common::setup_test_env();

    let app = create_router().expect("Failed to create router");

    let request = Request::builder()
        .method("GET")
        .uri("/products")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // Fresh router over memory storage serves exactly the demo set
    assert_eq!(
        json["data"].as_array().map(Vec::len),
        Some(storefront_core::demo_products().len())
    );
}

#[tokio::test]
#[serial_test::serial]
async fn unknown_product_is_404_without_a_socket() {
    // ---
    common::setup_test_env();

    let app = create_router().expect("Failed to create router");

    let request = Request::builder()
        .method("GET")
        .uri("/products/no-such-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial_test::serial]
async fn health_check_without_a_socket() {
    // ---
    common::setup_test_env();

    let app = create_router().expect("Failed to create router");

    let request = Request::builder()
        .method("GET")
        .uri("/health?mode=full")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"].as_str(), Some("ok"));
}
