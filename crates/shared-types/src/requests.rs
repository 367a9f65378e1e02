use serde::{Deserialize, Serialize};

use crate::access::{AccessContext, RedirectSuggestion, RequestLocation};
use crate::models::PlatformRole;

/// Query for `GET /api/access/check`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct AccessCheckQuery {
    /// Role identifier to test. Defaults to the caller's `X-User-Role`.
    pub role: Option<String>,
}

/// Access context of the host a request arrived on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessContextResponse {
    pub context: AccessContext,
    pub label: String,
    pub hostname: String,
    pub allowed_roles: Vec<PlatformRole>,
}

impl From<&RequestLocation> for AccessContextResponse {
    fn from(location: &RequestLocation) -> Self {
        let context = location.context();
        Self {
            context,
            label: context.label().to_string(),
            hostname: location.hostname.clone(),
            allowed_roles: context.allowed_roles().to_vec(),
        }
    }
}

/// Whether a role may operate on the current host, and where it should go
/// if not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessCheckResponse {
    pub context: AccessContext,
    pub role: String,
    pub allowed: bool,
    pub suggestion: Option<RedirectSuggestion>,
}

impl AccessCheckResponse {
    pub fn evaluate(location: &RequestLocation, role: &str) -> Self {
        Self {
            context: location.context(),
            role: role.to_string(),
            allowed: location.allows_role(role),
            suggestion: location.suggest_for_role(role),
        }
    }
}

/// The signed-in caller as seen from the current host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionContextResponse {
    pub context: AccessContext,
    pub context_label: String,
    pub role: PlatformRole,
    pub role_label: String,
    pub allowed: bool,
}

impl SessionContextResponse {
    pub fn new(location: &RequestLocation, role: PlatformRole) -> Self {
        let context = location.context();
        Self {
            context,
            context_label: context.label().to_string(),
            role,
            role_label: crate::format::format_role_label(role.as_str()),
            allowed: context.allows(role.as_str()),
        }
    }
}
