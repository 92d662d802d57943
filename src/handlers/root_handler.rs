//! handlers/root_handler.rs

use actix_web::HttpResponse;

use crate::models::weather_model::MessageResponse;

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Weather API. Use endpoints /weather/{city} to get weather information.";

/// GET /
pub async fn root_endpoint() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
