//! app.rs
use crate::handlers::{root_handler, weather_handler};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_handler::root_endpoint))
        .route(
            "/weather/{city}",
            web::get().to(weather_handler::get_weather_endpoint),
        )
        .route(
            "/today/{city}",
            web::get().to(weather_handler::get_today_weather_endpoint),
        );
}
