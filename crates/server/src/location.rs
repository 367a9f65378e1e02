use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap, Uri},
};
use shared_types::{AppError, RequestLocation};

use crate::state::AppState;

/// Extractor that resolves the network location a request arrived on.
///
/// Hostname priority:
/// 1. `X-Forwarded-Host` header (first value)
/// 2. `Host` header
/// 3. Request URI authority
///
/// Protocol priority:
/// 1. `X-Forwarded-Proto` header (first value)
/// 2. Request URI scheme
/// 3. The configured default (`features.assume_https`)
#[derive(Debug, Clone, PartialEq)]
pub struct Location(pub RequestLocation);

impl Location {
    /// Lowercase and drop any `:port` suffix, numeric or not.
    fn sanitize_host(raw: &str) -> String {
        let host = raw.trim().to_lowercase();
        // bracketed IPv6 literal, e.g. [::1]:8080
        if let Some(rest) = host.strip_prefix('[') {
            return match rest.split_once(']') {
                Some((addr, _)) => format!("[{addr}]"),
                None => String::new(),
            };
        }
        match host.split_once(':') {
            Some((name, _)) => name.to_string(),
            None => host,
        }
    }

    /// Only `http` and `https` are accepted, with or without the trailing `:`.
    fn sanitize_protocol(raw: &str) -> Option<String> {
        let proto = raw.trim().to_ascii_lowercase();
        match proto.strip_suffix(':').unwrap_or(proto.as_str()) {
            scheme @ ("http" | "https") => Some(scheme.to_string()),
            _ => None,
        }
    }

    fn first_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
        let raw = headers.get(name)?.to_str().ok()?;
        let first = raw.split(',').next()?.trim();
        if first.is_empty() {
            None
        } else {
            Some(first.to_string())
        }
    }

    /// Resolve the location from request headers and URI.
    /// Returns `None` when no usable hostname is present.
    pub fn from_request(headers: &HeaderMap, uri: &Uri, default_protocol: &str) -> Option<Self> {
        let host = Self::first_header_value(headers, "x-forwarded-host")
            .or_else(|| Self::first_header_value(headers, "host"))
            .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
            .map(|h| Self::sanitize_host(&h))
            .filter(|h| !h.is_empty())?;

        let protocol = Self::first_header_value(headers, "x-forwarded-proto")
            .and_then(|p| {
                let accepted = Self::sanitize_protocol(&p);
                if accepted.is_none() {
                    tracing::warn!(value = %p, "Ignoring unsupported X-Forwarded-Proto");
                }
                accepted
            })
            .or_else(|| uri.scheme_str().and_then(Self::sanitize_protocol))
            .unwrap_or_else(|| default_protocol.to_string());

        Some(Location(RequestLocation::new(protocol, host)))
    }
}

impl<S> FromRequestParts<S> for Location
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The access guard resolves the location once per request.
        if let Some(location) = parts.extensions.get::<Location>() {
            return Ok(location.clone());
        }

        let app_state = AppState::from_ref(state);
        Location::from_request(
            &parts.headers,
            &parts.uri,
            app_state.flags.default_protocol(),
        )
        .ok_or_else(|| AppError::bad_request("Missing required header: Host"))
    }
}
