use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::access::AccessContext;

/// Roles known to the admin front-end.
///
/// The wire form is the upper snake case identifier (`PLATFORM_ADMIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformRole {
    PlatformAdmin,
    OrgAdmin,
    OrgStaff,
}

impl PlatformRole {
    pub const ALL: [PlatformRole; 3] = [
        PlatformRole::PlatformAdmin,
        PlatformRole::OrgAdmin,
        PlatformRole::OrgStaff,
    ];

    /// Parse a wire identifier. Matching is exact; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PLATFORM_ADMIN" => Some(PlatformRole::PlatformAdmin),
            "ORG_ADMIN" => Some(PlatformRole::OrgAdmin),
            "ORG_STAFF" => Some(PlatformRole::OrgStaff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformRole::PlatformAdmin => "PLATFORM_ADMIN",
            PlatformRole::OrgAdmin => "ORG_ADMIN",
            PlatformRole::OrgStaff => "ORG_STAFF",
        }
    }

    /// The access context this role is expected to sign in on.
    pub fn home_context(&self) -> AccessContext {
        match self {
            PlatformRole::PlatformAdmin => AccessContext::Portal,
            PlatformRole::OrgAdmin | PlatformRole::OrgStaff => AccessContext::Network,
        }
    }
}

impl fmt::Display for PlatformRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An organization managed from the network side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// A row in the organization staff list.
///
/// `role` is kept as the raw identifier returned by the backend so that
/// unknown roles still render instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default = "default_true")]
    pub active: bool,
    pub joined_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// One item of the organization activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActivityEntry {
    pub id: Uuid,
    pub actor: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
