//! services/weather_service.rs
//! Lógica de negocio: cache, precarga y refresco periódico.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::WeatherResult;
use crate::models::weather_model::WeatherInfo;
use crate::services::weather_cache::WeatherCache;
use crate::services::weather_client::WeatherClient;

#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
    cache: WeatherCache,
}

impl WeatherService {
    pub fn new(client: WeatherClient, cache: WeatherCache) -> Self {
        Self { client, cache }
    }

    /// Devuelve lo que haya en cache; si no hay nada, consulta y guarda.
    /// Los errores no se guardan en cache.
    pub async fn get_weather(&self, city: &str) -> WeatherResult<WeatherInfo> {
        if let Some(info) = self.cache.get(city).await {
            log::debug!("(get_weather) '{}' servido desde cache", city);
            return Ok(info);
        }

        let info = self.client.fetch_weather(city).await?;
        self.cache.insert(city, info.clone()).await;
        log::info!("(get_weather) '{}' agregado al cache", city);
        Ok(info)
    }

    /// Siempre consulta upstream y no toca el cache.
    pub async fn get_today_weather(&self, city: &str) -> WeatherResult<WeatherInfo> {
        self.client.fetch_weather(city).await
    }

    /// Precarga las ciudades iniciales. Un fallo no detiene a las demás.
    pub async fn warm_up(&self, cities: &[String]) {
        for city in cities {
            match self.client.fetch_weather(city).await {
                Ok(info) => {
                    self.cache.insert(city, info).await;
                    log::info!("(warm_up) Datos iniciales de '{}' cargados", city);
                }
                Err(e) => {
                    log::warn!("(warm_up) No se pudo cargar '{}': {}", city, e);
                }
            }
        }
        let mut loaded = 0;
        for city in cities {
            if self.cache.contains(city).await {
                loaded += 1;
            }
        }
        log::info!(
            "(warm_up) Cargadas {} de {} ciudades ({} entradas en cache)",
            loaded,
            cities.len(),
            self.cache.len().await
        );
    }

    /// Lanza una tarea que cada `interval` vuelve a consultar la ciudad.
    /// Si falla, se conserva el dato anterior y se sigue intentando.
    pub fn spawn_refresh(&self, city: String, interval: Duration) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                service.refresh_once(&city).await;
            }
        })
    }

    async fn refresh_once(&self, city: &str) {
        match self.client.fetch_weather(city).await {
            Ok(info) => {
                self.cache.insert(city, info).await;
                log::info!("(refresh) '{}' actualizado", city);
            }
            Err(e) => match self.cache.get_entry(city).await {
                Some(stale) => log::error!(
                    "(refresh) Fallo al refrescar '{}': {}. Se mantiene el dato de hace {}s",
                    city,
                    e,
                    stale.fetched_at.elapsed().as_secs()
                ),
                None => log::error!("(refresh) Fallo al refrescar '{}': {}", city, e),
            },
        }
    }
}
