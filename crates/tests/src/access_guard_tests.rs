use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppError, AppErrorKind, FeatureFlags};

use crate::common;

#[tokio::test]
async fn allowed_role_reaches_session() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "network.example.com",
        Some("ORG_STAFF"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "context": "network",
            "context_label": "Organization Network",
            "role": "ORG_STAFF",
            "role_label": "Org Staff",
            "allowed": true
        })
    );
}

#[tokio::test]
async fn wrong_context_is_forbidden_with_redirect() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "network.example.com",
        Some("PLATFORM_ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let err: AppError = serde_json::from_value(body).unwrap();
    assert_eq!(err.kind, AppErrorKind::Forbidden);
    let redirect = err.redirect.expect("redirect suggestion");
    assert_eq!(redirect.url, "https://portal.example.com/login");
    assert_eq!(redirect.label, "Platform Portal");
}

#[tokio::test]
async fn redirect_keeps_forwarded_protocol() {
    let app = common::test_app();
    let (status, body) = common::get_with_headers(
        &app,
        "/api/session",
        &[
            ("host", "portal.staging.example.com"),
            ("x-forwarded-proto", "http"),
            ("x-user-role", "ORG_ADMIN"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["redirect"]["url"],
        "http://network.staging.example.com/login"
    );
}

#[tokio::test]
async fn redirect_ignores_unsupported_forwarded_protocol() {
    let app = common::test_app();
    let (status, body) = common::get_with_headers(
        &app,
        "/api/session",
        &[
            ("host", "portal.example.com"),
            ("x-forwarded-proto", "https://evil.test/#"),
            ("x-user-role", "ORG_ADMIN"),
        ],
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["redirect"]["url"], "https://network.example.com/login");
}

#[tokio::test]
async fn redirect_drops_non_numeric_port() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "portal.example.com:abc",
        Some("ORG_STAFF"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["redirect"]["url"], "https://network.example.com/login");
}

#[tokio::test]
async fn access_routes_skip_the_guard_for_wrong_role() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/access/context",
        "portal.example.com",
        Some("ORG_ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["context"], "portal");

    let (status, body) = common::get_on_host(
        &app,
        "/api/access/check",
        "portal.example.com",
        Some("ORG_ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
    assert_eq!(body["suggestion"]["url"], "https://network.example.com/login");
}

#[tokio::test]
async fn unknown_role_is_forbidden_without_redirect() {
    let app = common::test_app();
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "portal.example.com",
        Some("UNKNOWN_ROLE"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.get("redirect").is_none());
}

#[tokio::test]
async fn unrestricted_host_admits_all_known_roles() {
    let app = common::test_app();
    for role in ["PLATFORM_ADMIN", "ORG_ADMIN", "ORG_STAFF"] {
        let (status, body) = common::get_on_host(&app, "/api/session", "localhost", Some(role)).await;
        assert_eq!(status, StatusCode::OK, "{role}");
        assert_eq!(body["context"], "unrestricted", "{role}");
    }
}

#[tokio::test]
async fn anonymous_session_is_unauthorized() {
    let app = common::test_app();
    let (status, body) =
        common::get_on_host(&app, "/api/session", "portal.example.com", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn guarded_route_without_host_returns_400() {
    let app = common::test_app();
    let (status, _) =
        common::get_with_headers(&app, "/api/session", &[("x-user-role", "ORG_ADMIN")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn enforcement_off_lets_wrong_context_through() {
    let app = common::test_app_with_flags(FeatureFlags {
        enforce_access_context: false,
        ..FeatureFlags::default()
    });
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "portal.example.com",
        Some("ORG_ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], false);
}

#[tokio::test]
async fn http_default_protocol_when_not_assuming_https() {
    let app = common::test_app_with_flags(FeatureFlags {
        assume_https: false,
        ..FeatureFlags::default()
    });
    let (status, body) = common::get_on_host(
        &app,
        "/api/session",
        "network.example.com",
        Some("PLATFORM_ADMIN"),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["redirect"]["url"], "http://portal.example.com/login");
}
