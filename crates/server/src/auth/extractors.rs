use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use shared_types::AppError;

/// Header carrying the caller's role, set by the upstream auth proxy.
pub const ROLE_HEADER: &str = "x-user-role";

/// Read the trimmed, non-empty role identifier from the request headers.
pub fn role_from_headers(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(ROLE_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Extractor that requires a caller role. Returns 401 if the header is absent.
///
/// The role is passed through verbatim; recognising it is the resolver's job.
#[derive(Debug, Clone, PartialEq)]
pub struct CallerRole(pub String);

impl<S: Send + Sync> FromRequestParts<S> for CallerRole {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        role_from_headers(&parts.headers)
            .map(CallerRole)
            .ok_or_else(|| AppError::unauthorized("Missing required header: X-User-Role"))
    }
}

/// Extractor that optionally reads the caller role. Never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct MaybeRole(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeRole {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeRole(role_from_headers(&parts.headers)))
    }
}
