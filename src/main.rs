use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;

use crate::config::weather_config::WeatherConfig;
use crate::logger::init_logger;
use crate::services::weather_cache::WeatherCache;
use crate::services::weather_client::WeatherClient;
use crate::services::weather_service::WeatherService;

mod app;
mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = WeatherConfig::from_env().context("Configuración inválida")?;

    let client = WeatherClient::new(&config)?;
    let weather_service = WeatherService::new(client, WeatherCache::new());

    // Precarga y refresco en segundo plano de las ciudades iniciales
    weather_service.warm_up(&config.initial_cities).await;
    let refreshers: Vec<_> = config
        .initial_cities
        .iter()
        .map(|city| weather_service.spawn_refresh(city.clone(), config.refresh_interval()))
        .collect();
    log::info!(
        "{} tareas de refresco cada {}s",
        refreshers.len(),
        config.refresh_interval_secs
    );

    // Levantar servidor
    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(weather_service.clone()))
            .configure(app::init_app)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let result = server
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("No se pudo abrir {}:{}", config.host, config.port))?
        .run()
        .await;

    for handle in refreshers {
        handle.abort();
    }
    log::info!("Servidor detenido");

    result.context("El servidor terminó con error")
}
