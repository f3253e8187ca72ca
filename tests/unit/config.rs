//! Unit tests for configuration parsing

use kvant::config::Config;
use kvant::logging::LogFormat;
use std::collections::HashMap;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.port, 8080);
    assert_eq!(config.default_symbol, "SPY");
    assert_eq!(config.market_data_base_url, "https://query1.finance.yahoo.com");
    assert!(!config.is_production());
}

#[test]
fn test_config_overrides() {
    let config = config_from(&[
        ("ENVIRONMENT", "Production"),
        ("PORT", "9090"),
        ("MARKET_DATA_BASE_URL", "http://localhost:1234/"),
        ("MARKET_DATA_TIMEOUT_SECS", "3"),
        ("MARKET_DATA_MAX_RETRIES", "5"),
        ("DEFAULT_SYMBOL", "qqq"),
    ]);
    assert!(config.is_production());
    assert_eq!(config.port, 9090);
    assert_eq!(config.market_data_base_url, "http://localhost:1234");
    assert_eq!(config.request_timeout, Duration::from_secs(3));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.default_symbol, "QQQ");
}

#[test]
fn test_config_ignores_unparseable_values() {
    let config = config_from(&[("PORT", "eighty"), ("MARKET_DATA_MAX_RETRIES", "-1"), ("DEFAULT_SYMBOL", " ")]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_retries, 2);
    assert_eq!(config.default_symbol, "SPY");
}

#[test]
fn test_log_format_follows_environment() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment(" PROD "), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("sandbox"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment("staging"), LogFormat::Pretty);

    assert_eq!(config_from(&[]).log_format(), LogFormat::Pretty);
    assert_eq!(config_from(&[("ENVIRONMENT", "prod")]).log_format(), LogFormat::Json);
}
