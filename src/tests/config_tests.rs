//! tests/config_tests.rs
//! Pruebas de `WeatherConfig::from_lookup`.

use std::collections::HashMap;

use crate::config::weather_config::{Units, WeatherConfig, DEFAULT_BASE_URL};

fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<WeatherConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    WeatherConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_env_is_empty() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.api_key, None);
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.units, Units::Metric);
    assert_eq!(cfg.initial_cities, vec!["London", "New York", "Tokyo"]);
    assert_eq!(cfg.refresh_interval_secs, 86_400);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.workers, None);
}

#[test]
fn test_overrides_from_env() {
    let cfg = config_from(&[
        ("OPENWEATHERMAP_API_KEY", "abc123"),
        ("OPENWEATHERMAP_BASE_URL", "http://localhost:9999/data/2.5/weather"),
        ("WEATHER_UNITS", "Imperial"),
        ("WEATHER_INITIAL_CITIES", " Paris , ,Buenos Aires,"),
        ("WEATHER_REFRESH_INTERVAL_SECS", "3600"),
        ("WEATHER_REQUEST_TIMEOUT_SECS", "3"),
        ("HOST", "127.0.0.1"),
        ("PORT", "9090"),
        ("HTTP_WORKERS", "2"),
    ])
    .unwrap();

    assert_eq!(cfg.api_key.as_deref(), Some("abc123"));
    assert_eq!(cfg.units, Units::Imperial);
    assert_eq!(cfg.initial_cities, vec!["Paris", "Buenos Aires"]);
    assert_eq!(cfg.base_url, "http://localhost:9999/data/2.5/weather");
    assert_eq!(cfg.refresh_interval_secs, 3600);
    assert_eq!(cfg.request_timeout(), std::time::Duration::from_secs(3));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.workers, Some(2));
}

#[test]
fn test_blank_api_key_is_ignored() {
    let cfg = config_from(&[("OPENWEATHERMAP_API_KEY", "   ")]).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(config_from(&[("PORT", "not-a-port")]).is_err());
    assert!(config_from(&[("WEATHER_UNITS", "kelvin")]).is_err());
    assert!(config_from(&[("WEATHER_REFRESH_INTERVAL_SECS", "0")]).is_err());
    assert!(config_from(&[("WEATHER_REQUEST_TIMEOUT_SECS", "0")]).is_err());
    assert!(config_from(&[("HTTP_WORKERS", "0")]).is_err());
    assert!(config_from(&[("HTTP_WORKERS", "-2")]).is_err());
}

#[test]
fn test_unit_suffixes() {
    assert_eq!(Units::Metric.temperature_suffix(), "°C");
    assert_eq!(Units::Imperial.temperature_suffix(), "°F");
    assert_eq!(Units::Standard.temperature_suffix(), "K");
    assert_eq!(Units::Standard.as_query(), "standard");
}
