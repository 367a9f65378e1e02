use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use shared_types::AppError;

use super::extractors::role_from_headers;
use crate::location::Location;
use crate::state::AppState;

/// Paths that are served regardless of host or role.
const EXEMPT_PREFIXES: &[&str] = &["/health", "/docs", "/api/access"];

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Access-context guard.
///
/// On each request:
/// 1. Resolves the request location and inserts `Location` and
///    `AccessContext` into the request extensions
/// 2. If an `X-User-Role` is present and not allowed on this context,
///    responds 403 with the redirect suggestion in the error body
///
/// Requests without a role pass through; downstream handlers decide whether
/// anonymous access is acceptable. With `enforce_access_context` off, denials
/// are logged but the request continues.
pub async fn access_guard(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let location = Location::from_request(req.headers(), req.uri(), state.flags.default_protocol());

    let Some(location) = location else {
        if is_exempt(&path) {
            return next.run(req).await;
        }
        tracing::warn!(path = %path, "Rejecting request without a usable host");
        return AppError::bad_request("Missing required header: Host").into_response();
    };

    let context = location.0.context();
    req.extensions_mut().insert(context);
    req.extensions_mut().insert(location.clone());

    if is_exempt(&path) {
        return next.run(req).await;
    }

    if let Some(role) = role_from_headers(req.headers()) {
        if !location.0.allows_role(&role) {
            let suggestion = location.0.suggest_for_role(&role);
            tracing::warn!(
                host = %location.0.hostname,
                role = %role,
                %context,
                redirect = ?suggestion.as_ref().map(|s| &s.url),
                "Role not allowed on access context"
            );
            if state.flags.enforce_access_context {
                let message = format!("{role} cannot sign in to the {}", context.label());
                return AppError::forbidden(message)
                    .with_redirect(suggestion)
                    .into_response();
            }
        }
    }

    next.run(req).await
}
