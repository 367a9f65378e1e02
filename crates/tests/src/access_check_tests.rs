use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn platform_admin_on_portal_is_allowed() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/access/check?role=PLATFORM_ADMIN",
        "portal.example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "context": "portal",
            "role": "PLATFORM_ADMIN",
            "allowed": true,
            "suggestion": null
        })
    );
}

#[tokio::test]
async fn org_admin_on_portal_gets_network_suggestion() {
    let app = common::test_app();
    let (status, body) = common::get_with_headers(
        &app,
        "/api/access/check?role=ORG_ADMIN",
        &[("host", "portal.example.com"), ("x-forwarded-proto", "https")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
    assert_eq!(
        body["suggestion"],
        json!({
            "url": "https://network.example.com/login",
            "label": "Organization Network"
        })
    );
}

#[tokio::test]
async fn platform_admin_on_network_gets_portal_suggestion() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/access/check?role=PLATFORM_ADMIN",
        "network.example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
    assert_eq!(
        body["suggestion"],
        json!({
            "url": "https://portal.example.com/login",
            "label": "Platform Portal"
        })
    );
}

#[tokio::test]
async fn localhost_allows_every_known_role() {
    let app = common::test_app();
    for role in ["PLATFORM_ADMIN", "ORG_ADMIN", "ORG_STAFF"] {
        let uri = format!("/api/access/check?role={role}");
        let (status, body) = common::get_on_host(&app, &uri, "localhost", None).await;
        assert_eq!(status, StatusCode::OK, "{role}");
        assert_eq!(body["context"], "unrestricted", "{role}");
        assert_eq!(body["allowed"], true, "{role}");
        assert!(body["suggestion"].is_null(), "{role}");
    }
}

#[tokio::test]
async fn unknown_role_is_refused_without_suggestion() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/access/check?role=UNKNOWN_ROLE",
        "portal.example.com",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
    assert!(body["suggestion"].is_null());
}

#[tokio::test]
async fn unknown_role_refused_even_when_unrestricted() {
    let app = common::test_app();
    let (_, body) =
        common::get_on_host(&app, "/api/access/check?role=SUPERUSER", "localhost", None).await;
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn role_header_used_when_query_absent() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/access/check",
        "portal.example.com",
        Some("ORG_STAFF"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ORG_STAFF");
    assert_eq!(
        body["suggestion"]["url"],
        "https://network.example.com/login"
    );
}

#[tokio::test]
async fn missing_role_returns_400() {
    let app = common::test_app();
    let (status, _) =
        common::get_on_host(&app, "/api/access/check", "portal.example.com", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_checks_are_identical() {
    let app = common::test_app();
    let first = common::get_on_host(
        &app,
        "/api/access/check?role=ORG_ADMIN",
        "portal.example.com",
        None,
    )
    .await;
    let second = common::get_on_host(
        &app,
        "/api/access/check?role=ORG_ADMIN",
        "portal.example.com",
        None,
    )
    .await;
    assert_eq!(first, second);
}
