//! Hostname-based access contexts.
//!
//! The same front-end is deployed as the Platform Portal (`portal.<domain>`)
//! and the Organization Network (`network.<domain>`). Every other host is
//! unrestricted. Each context admits a fixed set of roles; a role found on
//! the wrong side gets pointed at the login page of the right one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::PlatformRole;

/// Path appended to a redirect suggestion.
pub const LOGIN_PATH: &str = "/login";

const PORTAL_PREFIX: &str = "portal.";
const NETWORK_PREFIX: &str = "network.";

/// Which deployment the caller is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AccessContext {
    Portal,
    Network,
    Unrestricted,
}

impl AccessContext {
    /// Classify a hostname. First match wins: `portal.` then `network.`.
    /// Prefixes are matched case-sensitively.
    pub fn from_hostname(hostname: &str) -> Self {
        if hostname.starts_with(PORTAL_PREFIX) {
            AccessContext::Portal
        } else if hostname.starts_with(NETWORK_PREFIX) {
            AccessContext::Network
        } else {
            AccessContext::Unrestricted
        }
    }

    /// Display name shown next to a redirect link.
    pub fn label(&self) -> &'static str {
        match self {
            AccessContext::Portal => "Platform Portal",
            AccessContext::Network => "Organization Network",
            AccessContext::Unrestricted => "Unrestricted",
        }
    }

    /// Roles admitted on this context. Unrestricted lists the known roles
    /// explicitly, so an unknown role is refused everywhere.
    pub fn allowed_roles(&self) -> &'static [PlatformRole] {
        match self {
            AccessContext::Portal => &[PlatformRole::PlatformAdmin],
            AccessContext::Network => &[PlatformRole::OrgAdmin, PlatformRole::OrgStaff],
            AccessContext::Unrestricted => &PlatformRole::ALL,
        }
    }

    /// Membership test against the allow list.
    pub fn allows(&self, role: &str) -> bool {
        PlatformRole::parse(role).is_some_and(|r| self.allowed_roles().contains(&r))
    }

    fn host_prefix(&self) -> Option<&'static str> {
        match self {
            AccessContext::Portal => Some(PORTAL_PREFIX),
            AccessContext::Network => Some(NETWORK_PREFIX),
            AccessContext::Unrestricted => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessContext::Portal => "portal",
            AccessContext::Network => "network",
            AccessContext::Unrestricted => "unrestricted",
        }
    }
}

impl fmt::Display for AccessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternate login location for a role that landed on the wrong context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RedirectSuggestion {
    pub url: String,
    pub label: String,
}

/// The network location a request arrived on.
///
/// `protocol` keeps its trailing colon (`https:`); `hostname` has no port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RequestLocation {
    pub protocol: String,
    pub hostname: String,
}

impl RequestLocation {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        let mut protocol = protocol.into();
        if !protocol.ends_with(':') {
            protocol.push(':');
        }
        Self {
            protocol,
            hostname: hostname.into(),
        }
    }

    pub fn context(&self) -> AccessContext {
        AccessContext::from_hostname(&self.hostname)
    }

    pub fn allows_role(&self, role: &str) -> bool {
        self.context().allows(role)
    }

    /// Where `role` should sign in instead, if it is on the wrong context.
    ///
    /// `None` on an unrestricted host, for a role already on its home
    /// context, and for roles that are not recognized.
    pub fn suggest_for_role(&self, role: &str) -> Option<RedirectSuggestion> {
        let current = self.context();
        let from = current.host_prefix()?;
        let target = PlatformRole::parse(role)?.home_context();
        if target == current {
            return None;
        }
        let to = target.host_prefix()?;
        let domain = self.hostname.strip_prefix(from)?;
        Some(RedirectSuggestion {
            url: format!("{}//{}{}{}", self.protocol, to, domain, LOGIN_PATH),
            label: target.label().to_string(),
        })
    }
}

pub fn resolve_context(location: &RequestLocation) -> AccessContext {
    location.context()
}

pub fn is_role_allowed(location: &RequestLocation, role: &str) -> bool {
    location.allows_role(role)
}

pub fn suggest_correct_location(
    location: &RequestLocation,
    role: &str,
) -> Option<RedirectSuggestion> {
    location.suggest_for_role(role)
}
