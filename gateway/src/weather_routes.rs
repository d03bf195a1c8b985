//! Current weather endpoints backed by OpenWeatherMap.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::{round1, AppState};

fn format_time(unix: i64) -> String {
    chrono::DateTime::from_timestamp(unix, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Full current-weather report for a named city.
pub async fn by_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let c = state.weather.fetch_by_city(&city).await?;

    Ok(Json(json!({
        "status": "success",
        "city": c.city,
        "country": c.country,
        "coordinates": { "lat": c.lat, "lon": c.lon },
        "weather": {
            "description": c.description,
            "icon": c.icon,
            "icon_url": format!("https://openweathermap.org/img/wn/{}@2x.png", c.icon),
        },
        "temperature": {
            "current": round1(c.temperature_c),
            "feels_like": round1(c.feels_like_c),
            "min": round1(c.temp_min_c),
            "max": round1(c.temp_max_c),
        },
        "humidity": c.humidity_pct,
        "pressure": c.pressure_hpa,
        "wind": { "speed": round1(c.wind_speed_ms * 3.6) },
        "visibility": c.visibility_m.unwrap_or(0.0) / 1000.0,
        "sunrise": format_time(c.sunrise_unix),
        "sunset": format_time(c.sunset_unix),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}

#[derive(Deserialize)]
pub struct CoordsQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Reduced current-weather report for a lat/lon point.
pub async fn by_coords(
    State(state): State<AppState>,
    Query(query): Query<CoordsQuery>,
) -> Result<Json<Value>, ApiError> {
    let (lat, lon) = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(ApiError::bad_request("Lat/lon required")),
    };

    let c = state.weather.fetch_by_coords(lat, lon).await?;

    Ok(Json(json!({
        "status": "success",
        "city": c.city,
        "coordinates": { "lat": c.lat, "lon": c.lon },
        "temperature": { "current": round1(c.temperature_c) },
        "humidity": c.humidity_pct,
        "weather": { "description": c.description },
    })))
}
