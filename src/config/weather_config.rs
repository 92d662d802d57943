//! config/weather_config.rs
//! Configuración global del servicio (API key, ciudades iniciales, servidor, etc.)
//! Se lee de variables de entorno (o del .env cargado con dotenv).

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Sistema de unidades que se pide a OpenWeatherMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Valor del parámetro `units` en la query.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Sufijo de la temperatura ("°C", "°F" o "K").
    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }
}

impl std::str::FromStr for Units {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            "standard" => Ok(Units::Standard),
            other => Err(anyhow!("Unidades desconocidas: '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub units: Units,
    /// Ciudades que se precargan al arrancar y se refrescan en segundo plano.
    pub initial_cities: Vec<String>,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    /// None = lo que decida actix (un worker por CPU)
    pub workers: Option<usize>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            units: Units::Metric,
            initial_cities: vec![
                "London".to_string(),
                "New York".to_string(),
                "Tokyo".to_string(),
            ],
            refresh_interval_secs: 60 * 60 * 24,
            request_timeout_secs: 10,
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: None,
        }
    }
}

impl WeatherConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Construye la config a partir de una función de búsqueda de claves,
    /// así los tests no tienen que tocar el entorno del proceso.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = WeatherConfig::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        cfg.api_key = get("OPENWEATHERMAP_API_KEY");
        if let Some(url) = get("OPENWEATHERMAP_BASE_URL") {
            cfg.base_url = url;
        }
        if let Some(units) = get("WEATHER_UNITS") {
            cfg.units = units.parse()?;
        }
        if let Some(cities) = get("WEATHER_INITIAL_CITIES") {
            cfg.initial_cities = parse_city_list(&cities);
        }
        if let Some(v) = get("WEATHER_REFRESH_INTERVAL_SECS") {
            cfg.refresh_interval_secs = parse_number(&v, "WEATHER_REFRESH_INTERVAL_SECS")?;
            if cfg.refresh_interval_secs == 0 {
                return Err(anyhow!("WEATHER_REFRESH_INTERVAL_SECS debe ser mayor que 0"));
            }
        }
        if let Some(v) = get("WEATHER_REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = parse_number(&v, "WEATHER_REQUEST_TIMEOUT_SECS")?;
            if cfg.request_timeout_secs == 0 {
                return Err(anyhow!("WEATHER_REQUEST_TIMEOUT_SECS debe ser mayor que 0"));
            }
        }
        if let Some(host) = get("HOST") {
            cfg.host = host;
        }
        if let Some(v) = get("PORT") {
            cfg.port = parse_number(&v, "PORT")?;
        }
        if let Some(v) = get("HTTP_WORKERS") {
            let workers: usize = parse_number(&v, "HTTP_WORKERS")?;
            if workers == 0 {
                return Err(anyhow!("HTTP_WORKERS debe ser mayor que 0"));
            }
            cfg.workers = Some(workers);
        }

        Ok(cfg)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_city_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T>(raw: &str, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Valor inválido para {}: '{}'", key, raw))
}
