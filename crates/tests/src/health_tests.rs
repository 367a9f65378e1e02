use axum::http::StatusCode;

use crate::common;

#[tokio::test]
async fn health_is_served_on_any_host() {
    let app = common::test_app();
    let (status, body) =
        common::get_on_host(&app, "/health", "portal.example.com", Some("ORG_STAFF")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_without_host_still_answers() {
    let app = common::test_app();
    let (status, body) = common::get_with_headers(&app, "/health", &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = common::test_app();
    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, req).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
