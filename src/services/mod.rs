//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod weather_cache;
pub mod weather_client;
pub mod weather_service;
