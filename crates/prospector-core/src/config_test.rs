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
fn parse_environment_variants() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.home_country, "US");
    assert_eq!(cfg.default_radius, 50);
    assert!(cfg.taxonomy_path.is_none());
    assert!(cfg.generator_url.is_none());
    assert!(cfg.generator_api_key.is_none());
    assert_eq!(cfg.generator_timeout_secs, 120);
    assert_eq!(cfg.user_agent, "prospector/0.1 (prospect-discovery)");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_ENV", "production");
    map.insert("PROSPECTOR_HOME_COUNTRY", "CA");
    map.insert("PROSPECTOR_DEFAULT_RADIUS", "125");
    map.insert("PROSPECTOR_TAXONOMY_PATH", "./config/taxonomy.yaml");
    map.insert("PROSPECTOR_GENERATOR_URL", "https://gen.example.com");
    map.insert("PROSPECTOR_GENERATOR_TIMEOUT_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.home_country, "CA");
    assert_eq!(cfg.default_radius, 125);
    assert_eq!(
        cfg.taxonomy_path.as_deref(),
        Some(std::path::Path::new("./config/taxonomy.yaml"))
    );
    assert_eq!(cfg.require_generator_url().ok(), Some("https://gen.example.com"));
    assert_eq!(cfg.generator_timeout_secs, 30);
}

#[test]
fn build_app_config_rejects_non_numeric_radius() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_DEFAULT_RADIUS", "wide");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROSPECTOR_DEFAULT_RADIUS"),
        "expected InvalidEnvVar(PROSPECTOR_DEFAULT_RADIUS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_out_of_range_radius() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_DEFAULT_RADIUS", "500");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROSPECTOR_DEFAULT_RADIUS"),
        "expected InvalidEnvVar(PROSPECTOR_DEFAULT_RADIUS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_GENERATOR_TIMEOUT_SECS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PROSPECTOR_GENERATOR_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PROSPECTOR_GENERATOR_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn blank_optional_values_are_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_GENERATOR_URL", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).expect("blank values are allowed");
    assert!(matches!(
        cfg.require_generator_url(),
        Err(ConfigError::MissingEnvVar(ref v)) if v == "PROSPECTOR_GENERATOR_URL"
    ));
}

#[test]
fn debug_redacts_generator_api_key() {
    let mut map = HashMap::new();
    map.insert("PROSPECTOR_GENERATOR_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid config");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
