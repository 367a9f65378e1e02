use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
/// Overridden by `CONFIG_PATH`.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Parse a `config.toml` document.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::internal(format!("Invalid config: {e}")))
}

fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path, %e, "Failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(path, %e, "Config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Load `.env`, read the config file and apply environment overrides, then
/// store the result in the global `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = read_config(&path);

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            if !addr.trim().is_empty() {
                config.server.bind_addr = addr.trim().to_string();
            }
        }

        tracing::info!(
            bind_addr = %config.server.bind_addr,
            features = ?config.features,
            "Configuration loaded"
        );
        config
    })
}
