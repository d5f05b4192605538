use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Smallest `localRadius` the radius slider offers, in miles.
pub const MIN_LOCAL_RADIUS: u32 = 10;
/// Largest `localRadius` the radius slider offers, in miles.
pub const MAX_LOCAL_RADIUS: u32 = 200;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PROSPECTOR_ENV", "development"));
    let log_level = or_default("PROSPECTOR_LOG_LEVEL", "info");
    let home_country = or_default("PROSPECTOR_HOME_COUNTRY", "US");

    let default_radius = parse_u32("PROSPECTOR_DEFAULT_RADIUS", "50")?;
    if !(MIN_LOCAL_RADIUS..=MAX_LOCAL_RADIUS).contains(&default_radius) {
        return Err(ConfigError::InvalidEnvVar {
            var: "PROSPECTOR_DEFAULT_RADIUS".to_string(),
            reason: format!(
                "{default_radius} is outside the supported range {MIN_LOCAL_RADIUS}..={MAX_LOCAL_RADIUS}"
            ),
        });
    }

    let taxonomy_path = optional("PROSPECTOR_TAXONOMY_PATH").map(PathBuf::from);
    let generator_url = optional("PROSPECTOR_GENERATOR_URL");
    let generator_api_key = optional("PROSPECTOR_GENERATOR_API_KEY");
    let generator_timeout_secs = parse_u64("PROSPECTOR_GENERATOR_TIMEOUT_SECS", "120")?;
    let user_agent = or_default("PROSPECTOR_USER_AGENT", "prospector/0.1 (prospect-discovery)");

    Ok(AppConfig {
        env,
        log_level,
        home_country,
        default_radius,
        taxonomy_path,
        generator_url,
        generator_api_key,
        generator_timeout_secs,
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
#[path = "config_test.rs"]
mod tests;
