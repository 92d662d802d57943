//! config/mod.rs
pub mod weather_config;
