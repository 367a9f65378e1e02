use serde::{Deserialize, Serialize};

/// Feature flags controlling optional behaviour of the access layer.
///
/// Loaded from `config.toml` at server startup. Missing fields take the
/// defaults below, so an empty file yields a fully enforcing server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Reject roles that are not allowed on the current access context.
    /// When off, denials are only logged.
    #[serde(default = "enabled")]
    pub enforce_access_context: bool,
    /// Emit a tracing span per HTTP request.
    #[serde(default = "enabled")]
    pub request_logging: bool,
    /// Protocol assumed when neither `X-Forwarded-Proto` nor the request
    /// URI carries one.
    #[serde(default = "enabled")]
    pub assume_https: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enforce_access_context: true,
            request_logging: true,
            assume_https: true,
        }
    }
}

impl FeatureFlags {
    pub fn default_protocol(&self) -> &'static str {
        if self.assume_https {
            "https:"
        } else {
            "http:"
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}
