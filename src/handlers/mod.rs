//! handlers/mod.rs
pub mod root_handler;
pub mod weather_handler;
