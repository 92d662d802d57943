//! handlers/weather_handler.rs
//! Endpoints de clima por ciudad.

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::error::WeatherError;
use crate::services::weather_service::WeatherService;

/// GET /weather/{city}
/// Usa el cache; solo consulta upstream si la ciudad no está.
pub async fn get_weather_endpoint(
    weather_service: web::Data<WeatherService>,
    path: web::Path<String>,
) -> HttpResponse {
    let city = path.into_inner();

    match weather_service.get_weather(&city).await {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => error_response(e),
    }
}

/// GET /today/{city}
pub async fn get_today_weather_endpoint(
    weather_service: web::Data<WeatherService>,
    path: web::Path<String>,
) -> HttpResponse {
    let city = path.into_inner();

    match weather_service.get_today_weather(&city).await {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => error_response(e),
    }
}

/// Upstream -> mismo status y el cuerpo que mandó OpenWeatherMap.
/// Conexión o decodificación -> 502.
fn error_response(err: WeatherError) -> HttpResponse {
    match err {
        WeatherError::Upstream { status, detail } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(code).json(detail)
        }
        WeatherError::Transport(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": "Upstream unavailable",
            "details": e.to_string()
        })),
        WeatherError::Decode { message } => HttpResponse::BadGateway().json(serde_json::json!({
            "error": "Invalid upstream response",
            "details": message
        })),
    }
}
