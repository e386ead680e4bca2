use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process. Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("GOTTAGO_ENV", "development"));
    let bind_addr = parse_addr("GOTTAGO_BIND_ADDR", "0.0.0.0:5174")?;
    let log_level = or_default("GOTTAGO_LOG_LEVEL", "info");

    // Empty string counts as unset so a blank .env line doesn't masquerade
    // as a configured credential.
    let yelp_api_key = lookup("YELP_API_KEY").ok().filter(|key| !key.is_empty());

    let yelp_base_url = or_default("GOTTAGO_YELP_BASE_URL", "https://api.yelp.com/ai/chat/v2");
    let geocode_base_url = or_default(
        "GOTTAGO_GEOCODE_BASE_URL",
        "https://nominatim.openstreetmap.org",
    );
    let request_timeout_secs = parse_u64("GOTTAGO_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GOTTAGO_USER_AGENT", "gottago/0.1 (facility-finder)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        yelp_api_key,
        yelp_base_url,
        geocode_base_url,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults_without_key() {
        let map = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(config.env, Environment::Development);
        assert_eq!(config.bind_addr.port(), 5174);
        assert_eq!(config.log_level, "info");
        assert!(!config.has_key());
        assert_eq!(config.yelp_base_url, "https://api.yelp.com/ai/chat/v2");
    }

    #[test]
    fn api_key_is_picked_up_and_redacted_in_debug() {
        let mut map = HashMap::new();
        map.insert("YELP_API_KEY", "super-secret");
        let config = build_app_config(lookup_from_map(&map)).expect("config");
        assert!(config.has_key());
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let mut map = HashMap::new();
        map.insert("YELP_API_KEY", "");
        let config = build_app_config(lookup_from_map(&map)).expect("config");
        assert!(!config.has_key());
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut map = HashMap::new();
        map.insert("GOTTAGO_BIND_ADDR", "not-an-addr");
        let err = build_app_config(lookup_from_map(&map)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "GOTTAGO_BIND_ADDR"));
    }

    #[test]
    fn environment_parses_known_values() {
        assert_eq!(parse_environment("production"), Environment::Production);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("anything"), Environment::Development);
    }
}
