use axum::Json;

use shared_types::{AppError, PlatformRole, SessionContextResponse};

use crate::auth::extractors::CallerRole;
use crate::location::Location;

/// Describe the caller's role on the current host.
///
/// Runs behind the access guard, so a caller on the wrong context has
/// already been turned away with a redirect suggestion.
#[utoipa::path(
    get,
    path = "/api/session",
    params(
        ("Host" = String, Header, description = "Requesting hostname"),
        ("X-User-Role" = String, Header, description = "Caller role set by the auth proxy")
    ),
    responses(
        (status = 200, description = "Session context", body = SessionContextResponse),
        (status = 401, description = "No caller role", body = AppError),
        (status = 403, description = "Role not allowed on this host", body = AppError)
    ),
    tag = "session"
)]
pub async fn get_session(
    location: Location,
    CallerRole(role): CallerRole,
) -> Result<Json<SessionContextResponse>, AppError> {
    let role = PlatformRole::parse(&role)
        .ok_or_else(|| AppError::forbidden(format!("Unknown role: {role}")))?;
    Ok(Json(SessionContextResponse::new(&location.0, role)))
}
