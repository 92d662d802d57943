//! tests/mod.rs
//! Pruebas del servicio. Upstream se simula con httpmock.

mod config_tests;

use httpmock::MockServer;
use serde_json::{json, Value};

use crate::config::weather_config::WeatherConfig;
use crate::services::weather_cache::WeatherCache;
use crate::services::weather_client::WeatherClient;
use crate::services::weather_service::WeatherService;

pub(crate) const OWM_PATH: &str = "/data/2.5/weather";

/// Cuerpo mínimo de OpenWeatherMap con los campos que leemos.
pub(crate) fn owm_body(temp: Value, humidity: Value, description: &str) -> Value {
    json!({
        "coord": { "lon": -0.13, "lat": 51.51 },
        "weather": [{ "id": 300, "main": "Drizzle", "description": description }],
        "main": { "temp": temp, "humidity": humidity, "pressure": 1012 },
        "name": "Test City",
        "cod": 200
    })
}

pub(crate) fn test_config(base_url: String) -> WeatherConfig {
    WeatherConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        request_timeout_secs: 5,
        ..WeatherConfig::default()
    }
}

/// Servicio apuntando al mock; devuelve también el cache para inspeccionarlo.
pub(crate) fn test_service(server: &MockServer) -> (WeatherService, WeatherCache) {
    service_for(test_config(server.url(OWM_PATH)))
}

pub(crate) fn service_for(config: WeatherConfig) -> (WeatherService, WeatherCache) {
    let client = WeatherClient::new(&config).expect("Failed to build client");
    let cache = WeatherCache::new();
    (WeatherService::new(client, cache.clone()), cache)
}
