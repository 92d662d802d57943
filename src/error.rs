//! error.rs
//! Errores al consultar el clima. Los handlers los traducen a códigos HTTP.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// OpenWeatherMap respondió con un status distinto de 200.
    #[error("Upstream respondió {status}: {detail}")]
    Upstream { status: u16, detail: Value },

    /// El error nunca lleva la URL: la query incluye el appid.
    #[error("Fallo de conexión con upstream: {0}")]
    Transport(reqwest::Error),

    #[error("Respuesta de upstream inválida: {message}")]
    Decode { message: String },
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err.without_url())
    }
}

pub type WeatherResult<T> = std::result::Result<T, WeatherError>;
