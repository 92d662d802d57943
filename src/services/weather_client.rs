//! services/weather_client.rs
//! Cliente HTTP hacia OpenWeatherMap.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::config::weather_config::{Units, WeatherConfig};
use crate::error::{WeatherError, WeatherResult};
use crate::models::weather_model::{OwmCurrentWeather, WeatherInfo};

#[derive(Clone)]
pub struct WeatherClient {
    http_client: Client,
    base_url: Arc<String>,
    api_key: Option<Arc<String>>,
    units: Units,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("No se pudo construir el cliente HTTP")?;

        if config.api_key.is_none() {
            log::warn!("No se definió OPENWEATHERMAP_API_KEY, las consultas irán sin appid");
        }

        Ok(Self {
            http_client,
            base_url: Arc::new(config.base_url.clone()),
            api_key: config.api_key.clone().map(Arc::new),
            units: config.units,
        })
    }

    /// Consulta el clima actual de una ciudad.
    pub async fn fetch_weather(&self, city: &str) -> WeatherResult<WeatherInfo> {
        let mut query: Vec<(&str, &str)> = vec![("q", city)];
        if let Some(key) = &self.api_key {
            query.push(("appid", key.as_str()));
        }
        query.push(("units", self.units.as_query()));

        log::debug!("(fetch_weather) GET {} q={}", self.base_url, city);
        let resp = self
            .http_client
            .get(self.base_url.as_str())
            .query(&query)
            .send()
            .await?;

        let status = resp.status();
        // Cualquier cosa distinta de 200 se reenvía tal cual, incluso otros 2xx
        if status != StatusCode::OK {
            let body_txt = resp.text().await.unwrap_or_default();
            log::error!(
                "(fetch_weather) Error consultando '{}': {} - {}",
                city,
                status.as_u16(),
                body_txt
            );
            let detail = serde_json::from_str::<Value>(&body_txt)
                .unwrap_or_else(|_| serde_json::json!({ "message": body_txt }));
            return Err(WeatherError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let body = resp.bytes().await?;
        let raw: OwmCurrentWeather =
            serde_json::from_slice(&body).map_err(|e| WeatherError::Decode {
                message: format!("{} (ciudad '{}')", e, city),
            })?;

        raw.into_weather_info(self.units)
            .ok_or_else(|| WeatherError::Decode {
                message: format!("La respuesta para '{}' no trae condiciones", city),
            })
    }
}
