//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod weather_model;
