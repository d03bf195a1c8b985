//! Disaster risk assessment endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use disaster_risk::{assess_city_risk, WeatherSnapshot};

use crate::error::ApiError;
use crate::AppState;

const DEFAULT_ELEVATION_M: f64 = 50.0;

/// Combined flood/landslide assessment from current weather. Failures in
/// the upstream fetch surface as 404; the scorer itself never fails.
pub async fn assess_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let weather = state.weather.fetch_by_city(&city).await.map_err(|err| {
        tracing::debug!("weather fetch failed for {city}: {err}");
        ApiError::not_found("Could not fetch weather data")
    })?;

    let humidity = weather.humidity_pct;
    // Rainfall proxy: the provider's last-hour figure extrapolated to 24h
    // when present, otherwise a humidity-derived estimate.
    let rainfall = weather
        .rainfall_24h_estimate()
        .unwrap_or(humidity / 2.0);

    let snapshot = WeatherSnapshot {
        rainfall: Some(rainfall),
        humidity: Some(humidity),
        temperature: Some(weather.temperature_c),
    };
    let assessment = assess_city_risk(&weather.city, Some(DEFAULT_ELEVATION_M), snapshot);

    Ok(Json(json!({ "status": "success", "data": assessment })))
}
