//! models/weather_model.rs
//! Estructuras de datos del clima: la respuesta que damos y lo que
//! leemos de OpenWeatherMap.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::config::weather_config::Units;

/// Lo que devuelven /weather/{city} y /today/{city}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// --------------------------------------------------------------------------------
// Respuesta de OpenWeatherMap (solo los campos que usamos)
// --------------------------------------------------------------------------------
#[derive(Debug, Clone, Deserialize)]
pub struct OwmMain {
    /// Se guarda como `Number` para imprimirlo tal cual vino (15 vs 15.0).
    pub temp: Number,
    pub humidity: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmCondition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmCurrentWeather {
    pub main: OwmMain,
    pub weather: Vec<OwmCondition>,
}

impl OwmCurrentWeather {
    /// Convierte la respuesta cruda a `WeatherInfo`.
    /// Devuelve None si no viene ninguna condición en `weather`.
    pub fn into_weather_info(self, units: Units) -> Option<WeatherInfo> {
        let condition = self.weather.into_iter().next()?.description;
        Some(WeatherInfo {
            temperature: format!("{}{}", self.main.temp, units.temperature_suffix()),
            humidity: format!("{}%", self.main.humidity),
            condition,
        })
    }
}
