//! services/weather_cache.rs
//! Cache en memoria ciudad -> último clima obtenido.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::models::weather_model::WeatherInfo;

#[derive(Debug, Clone)]
pub struct CachedWeather {
    pub info: WeatherInfo,
    pub fetched_at: Instant,
}

/// Las entradas no caducan; solo se reemplazan con un fetch posterior.
#[derive(Clone, Default)]
pub struct WeatherCache {
    entries: Arc<RwLock<HashMap<String, CachedWeather>>>,
}

impl WeatherCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, city: &str) -> Option<WeatherInfo> {
        self.entries
            .read()
            .await
            .get(city)
            .map(|entry| entry.info.clone())
    }

    pub async fn get_entry(&self, city: &str) -> Option<CachedWeather> {
        self.entries.read().await.get(city).cloned()
    }

    pub async fn insert(&self, city: &str, info: WeatherInfo) {
        let entry = CachedWeather {
            info,
            fetched_at: Instant::now(),
        };
        self.entries.write().await.insert(city.to_string(), entry);
    }

    pub async fn contains(&self, city: &str) -> bool {
        self.entries.read().await.contains_key(city)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
