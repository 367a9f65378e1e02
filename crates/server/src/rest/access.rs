use axum::{extract::Query, Json};

use shared_types::{AccessCheckQuery, AccessCheckResponse, AccessContextResponse, AppError};

use crate::auth::extractors::MaybeRole;
use crate::location::Location;

// ---------------------------------------------------------------------------
// GET /api/access/context
// ---------------------------------------------------------------------------

/// Describe the access context of the requesting host.
#[utoipa::path(
    get,
    path = "/api/access/context",
    params(
        ("Host" = String, Header, description = "Requesting hostname")
    ),
    responses(
        (status = 200, description = "Access context for the host", body = AccessContextResponse),
        (status = 400, description = "No usable host", body = AppError)
    ),
    tag = "access"
)]
pub async fn get_access_context(location: Location) -> Json<AccessContextResponse> {
    Json(AccessContextResponse::from(&location.0))
}

// ---------------------------------------------------------------------------
// GET /api/access/check
// ---------------------------------------------------------------------------

/// Check whether a role may operate on the requesting host.
///
/// The role comes from `?role=` or, failing that, `X-User-Role`. Unknown
/// roles are reported as not allowed rather than rejected.
#[utoipa::path(
    get,
    path = "/api/access/check",
    params(
        AccessCheckQuery,
        ("Host" = String, Header, description = "Requesting hostname"),
        ("X-User-Role" = Option<String>, Header, description = "Caller role, used when ?role= is absent")
    ),
    responses(
        (status = 200, description = "Access decision", body = AccessCheckResponse),
        (status = 400, description = "No role or no usable host", body = AppError)
    ),
    tag = "access"
)]
pub async fn check_access(
    location: Location,
    MaybeRole(header_role): MaybeRole,
    Query(params): Query<AccessCheckQuery>,
) -> Result<Json<AccessCheckResponse>, AppError> {
    let role = params
        .role
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .or(header_role)
        .ok_or_else(|| AppError::bad_request("A role is required: pass ?role= or X-User-Role"))?;

    let response = AccessCheckResponse::evaluate(&location.0, &role);
    tracing::debug!(
        host = %location.0.hostname,
        role = %role,
        allowed = response.allowed,
        "Access check"
    );
    Ok(Json(response))
}
