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

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("STOREFRONT_GRAPHQL_URL", "https://shop.example.com/graphql/");
    m
}

#[test]
fn parse_environment_accepts_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "STOREFRONT_ENV"));
}

#[test]
fn build_app_config_fails_without_graphql_url() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "STOREFRONT_GRAPHQL_URL"),
        "expected MissingEnvVar(STOREFRONT_GRAPHQL_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_graphql_url_as_missing() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_GRAPHQL_URL", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_rejects_non_http_graphql_url() {
    let mut map = HashMap::new();
    map.insert("STOREFRONT_GRAPHQL_URL", "ftp://shop.example.com/graphql");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_GRAPHQL_URL"),
        "expected InvalidEnvVar(STOREFRONT_GRAPHQL_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("STOREFRONT_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_BIND_ADDR"),
        "expected InvalidEnvVar(STOREFRONT_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.graphql_url, "https://shop.example.com/graphql/");
    assert_eq!(cfg.channel, "uk");
    assert!(cfg.graphql_token.is_none());
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "storefront/0.1");
    assert_eq!(cfg.rate_limit_per_minute, 120);
    assert_eq!(cfg.build_concurrency, 4);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = full_env();
    map.insert("STOREFRONT_CHANNEL", "default-channel");
    map.insert("STOREFRONT_ENV", "production");
    map.insert("STOREFRONT_REQUEST_TIMEOUT_SECS", "5");
    map.insert("STOREFRONT_BUILD_CONCURRENCY", "8");
    map.insert("STOREFRONT_GRAPHQL_TOKEN", "secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.channel, "default-channel");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.build_concurrency, 8);
    assert_eq!(cfg.graphql_token.as_deref(), Some("secret"));
}

#[test]
fn build_app_config_rejects_zero_build_concurrency() {
    let mut map = full_env();
    map.insert("STOREFRONT_BUILD_CONCURRENCY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_BUILD_CONCURRENCY"),
        "expected InvalidEnvVar(STOREFRONT_BUILD_CONCURRENCY), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = full_env();
    map.insert("STOREFRONT_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOREFRONT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(STOREFRONT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_token() {
    let mut map = full_env();
    map.insert("STOREFRONT_GRAPHQL_TOKEN", "super-secret-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret-token"));
    assert!(rendered.contains("[redacted]"));
}
